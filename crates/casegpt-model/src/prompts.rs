//! Prompt templates for case generation and case questions.
//!
//! The case prompt is fixed. The question prompt is a Tera template with
//! two variables, `narrative` and `question`, and can be replaced from
//! configuration.

use tera::{Context, Tera};

use crate::error::ModelError;

/// System prompt for case generation. The closing marker format must match
/// `casegpt_core::parse::DIAGNOSIS_MARKER`.
pub const CASE_SYSTEM_PROMPT: &str = "\
You are an experienced medical educator. Create a detailed clinical case including:
- Patient demographics
- Chief complaint
- Relevant medical history
- Physical examination findings
- Diagnostic clues
End with the correct diagnosis in this format: [CORRECT_DIAGNOSIS: <diagnosis>]";

/// Default question template.
pub const DEFAULT_QUESTION_TEMPLATE: &str =
    "Based on this case: {{ narrative }}\n\nQuestion: {{ question }}";

const QUESTION_TEMPLATE_NAME: &str = "question";

/// Compiled prompt templates.
#[derive(Debug, Clone)]
pub struct PromptBook {
    tera: Tera,
}

impl PromptBook {
    /// Prompt book using [`DEFAULT_QUESTION_TEMPLATE`].
    pub fn new() -> Result<Self, ModelError> {
        Self::with_question_template(DEFAULT_QUESTION_TEMPLATE)
    }

    /// Compile a custom question template.
    ///
    /// The template is test-rendered once so that references to unknown
    /// variables fail here rather than on the first question.
    pub fn with_question_template(template: &str) -> Result<Self, ModelError> {
        let mut tera = Tera::default();
        tera.add_raw_template(QUESTION_TEMPLATE_NAME, template)?;
        let book = Self { tera };
        book.question_prompt("", "")?;
        Ok(book)
    }

    pub fn case_system_prompt(&self) -> &'static str {
        CASE_SYSTEM_PROMPT
    }

    /// Render the prompt that asks a question about `narrative`.
    pub fn question_prompt(&self, narrative: &str, question: &str) -> Result<String, ModelError> {
        let mut context = Context::new();
        context.insert("narrative", narrative);
        context.insert("question", question);
        Ok(self.tera.render(QUESTION_TEMPLATE_NAME, &context)?)
    }
}
