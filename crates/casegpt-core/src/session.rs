//! Interactive quiz session state.
//!
//! A [`Session`] owns the append-only transcript and the case record.
//! Every trigger point of the quiz (new case, question, diagnosis
//! submission, reveal) is a method taking `&mut self`, so transcript
//! appends can never interleave.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::SessionError;
use crate::matcher::is_match;
use crate::models::case::Case;
use crate::models::message::Message;

/// Whether a case is in play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseState {
    #[default]
    NoCase,
    Active { case: Case, revealed: bool },
}

/// Outcome of a diagnosis submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    /// Assistant feedback appended to the transcript for `guess`.
    pub fn feedback(self, guess: &str) -> String {
        let outcome = match self {
            Verdict::Correct => "\u{2705} Correct! Well done!",
            Verdict::Incorrect => "\u{274c} Incorrect. Keep analyzing the case.",
        };
        format!("Your diagnosis: {guess}\n\n{outcome}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: Uuid,
    messages: Vec<Message>,
    state: CaseState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            state: CaseState::NoCase,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The transcript in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> &CaseState {
        &self.state
    }

    pub fn case(&self) -> Option<&Case> {
        match &self.state {
            CaseState::Active { case, .. } => Some(case),
            CaseState::NoCase => None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.state, CaseState::Active { revealed: true, .. })
    }

    /// Replace the active case and restart the transcript with its
    /// narrative as the only message.
    pub fn start_case(&mut self, case: Case) {
        info!(
            session_id = %self.id,
            narrative_len = case.narrative.len(),
            has_diagnosis = case.has_diagnosis(),
            "starting new case"
        );
        self.messages = vec![Message::assistant(case.narrative.clone())];
        self.state = CaseState::Active {
            case,
            revealed: false,
        };
    }

    /// Append a question and the model's answer to it.
    pub fn record_exchange(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.require_case()?;
        self.messages.push(Message::user(question));
        self.messages.push(Message::assistant(answer));
        Ok(())
    }

    /// Judge a diagnosis guess against the active case and append the
    /// submission and its feedback to the transcript.
    pub fn submit_diagnosis(&mut self, guess: &str) -> Result<Verdict, SessionError> {
        if guess.trim().is_empty() {
            return Err(SessionError::EmptyGuess);
        }
        let case = self.require_case()?;
        if !case.has_diagnosis() {
            return Err(SessionError::DiagnosisUnavailable);
        }

        let verdict = if is_match(guess, &case.diagnosis) {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };

        info!(session_id = %self.id, ?verdict, "diagnosis submitted");

        self.messages
            .push(Message::user(format!("Diagnosis Submitted: {guess}")));
        self.messages
            .push(Message::assistant(verdict.feedback(guess)));

        Ok(verdict)
    }

    /// Mark the diagnosis as revealed and append it to the transcript.
    /// Returns the revealed diagnosis.
    pub fn reveal(&mut self) -> Result<String, SessionError> {
        let CaseState::Active { case, revealed } = &mut self.state else {
            return Err(SessionError::NoActiveCase);
        };
        if !case.has_diagnosis() {
            return Err(SessionError::DiagnosisUnavailable);
        }

        *revealed = true;
        let diagnosis = case.diagnosis.clone();
        self.messages
            .push(Message::assistant(format!("Correct Diagnosis: {diagnosis}")));

        info!(session_id = %self.id, "diagnosis revealed");

        Ok(diagnosis)
    }

    fn require_case(&self) -> Result<&Case, SessionError> {
        self.case().ok_or(SessionError::NoActiveCase)
    }
}
