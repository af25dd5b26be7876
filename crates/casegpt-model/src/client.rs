use crate::error::ModelError;

/// A blocking text-completion model.
///
/// Both calls are one-shot: no retries, no streaming. A failed call is an
/// `Err`, never an empty or placeholder completion.
pub trait CaseModel {
    /// Run a request consisting of a system prompt only. Used for case
    /// generation.
    fn generate(&self, system_prompt: &str) -> Result<String, ModelError>;

    /// Run a request consisting of a single user turn. Used for questions
    /// about the active case.
    fn complete(&self, user_prompt: &str) -> Result<String, ModelError>;

    /// Identifier of the underlying model, for logging.
    fn model_id(&self) -> &str;
}

impl<M: CaseModel + ?Sized> CaseModel for Box<M> {
    fn generate(&self, system_prompt: &str) -> Result<String, ModelError> {
        (**self).generate(system_prompt)
    }

    fn complete(&self, user_prompt: &str) -> Result<String, ModelError> {
        (**self).complete(user_prompt)
    }

    fn model_id(&self) -> &str {
        (**self).model_id()
    }
}

/// Reject completions that carry no text at all.
pub(crate) fn non_empty(text: String) -> Result<String, ModelError> {
    if text.trim().is_empty() {
        Err(ModelError::EmptyCompletion)
    } else {
        Ok(text)
    }
}
