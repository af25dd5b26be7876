//! casegpt-core
//!
//! Pure domain types for a clinical-case quiz session: the case model,
//! the transcript, the case-response parser and the diagnosis matcher.
//! No network or document dependency; this is the shared vocabulary of
//! the CaseGPT workspace.

pub mod error;
pub mod matcher;
pub mod models;
pub mod parse;
pub mod session;
