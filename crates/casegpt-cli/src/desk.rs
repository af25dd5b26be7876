//! The case desk: runs each quiz action against a model and a session.
//!
//! Model calls happen before any session mutation, so a failed call leaves
//! the transcript and case exactly as they were.

use std::path::{Path, PathBuf};

use casegpt_core::error::SessionError;
use casegpt_core::parse::parse_case;
use casegpt_core::session::Session;
use casegpt_export::error::RenderError;
use casegpt_export::styles::DocumentStyles;
use casegpt_model::client::CaseModel;
use casegpt_model::error::ModelError;
use casegpt_model::prompts::PromptBook;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write transcript to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// How a freshly generated case turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStart {
    Ready,
    /// The model left out the diagnosis marker. The case can be discussed
    /// but guesses cannot be judged.
    MissingDiagnosis,
}

pub struct CaseDesk<M> {
    model: M,
    prompts: PromptBook,
    styles: DocumentStyles,
}

impl<M: CaseModel> CaseDesk<M> {
    pub fn new(model: M, prompts: PromptBook, styles: DocumentStyles) -> Self {
        Self {
            model,
            prompts,
            styles,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Generate a case and make it the session's active case.
    pub fn new_case(&self, session: &mut Session) -> Result<CaseStart, DeskError> {
        let completion = self.model.generate(self.prompts.case_system_prompt())?;
        let parsed = parse_case(&completion);
        let start = if parsed.marker_found {
            CaseStart::Ready
        } else {
            warn!(session_id = %session.id(), model = self.model.model_id(), "generated case has no diagnosis");
            CaseStart::MissingDiagnosis
        };

        session.start_case(parsed.into_case());
        Ok(start)
    }

    /// Ask the model a question about the active case and record the
    /// exchange. Returns the model's answer.
    pub fn ask(&self, session: &mut Session, question: &str) -> Result<String, DeskError> {
        let case = session.case().ok_or(SessionError::NoActiveCase)?;
        let prompt = self.prompts.question_prompt(&case.narrative, question)?;

        info!(session_id = %session.id(), question_len = question.len(), "asking question");
        let answer = self.model.complete(&prompt)?;

        session.record_exchange(question, answer.clone())?;
        Ok(answer)
    }

    /// Render the transcript to PDF and write it to `path`.
    pub fn export(&self, session: &Session, path: &Path) -> Result<PathBuf, DeskError> {
        let bytes = casegpt_export::render_with(session.messages(), &self.styles)?;

        let write_err = |source| DeskError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, &bytes).map_err(write_err)?;

        info!(
            session_id = %session.id(),
            path = %path.display(),
            messages = session.messages().len(),
            "transcript exported"
        );
        Ok(path.to_path_buf())
    }
}
