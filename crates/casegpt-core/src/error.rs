use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no case is active; generate a case first")]
    NoActiveCase,

    #[error("diagnosis guess is empty")]
    EmptyGuess,

    #[error("the active case has no recorded diagnosis to compare against")]
    DiagnosisUnavailable,
}
