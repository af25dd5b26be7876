//! Case-generation output parsing.
//!
//! The case prompt asks the model to finish its vignette with
//! `[CORRECT_DIAGNOSIS: <diagnosis>]`. Everything before the first marker
//! is the narrative shown to the user; the marker payload is the label the
//! user's guesses are compared against.

use tracing::warn;

use crate::models::case::Case;

/// Literal that opens the diagnosis payload in a generated case.
pub const DIAGNOSIS_MARKER: &str = "[CORRECT_DIAGNOSIS:";

/// Result of splitting a case-generation completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCase {
    pub narrative: String,
    pub diagnosis: String,
    /// `false` when the completion did not contain [`DIAGNOSIS_MARKER`].
    /// In that case the whole completion is the narrative and the
    /// diagnosis is empty.
    pub marker_found: bool,
}

impl ParsedCase {
    pub fn into_case(self) -> Case {
        Case {
            narrative: self.narrative,
            diagnosis: self.diagnosis,
        }
    }
}

/// Split a raw completion into narrative and diagnosis.
///
/// The narrative is returned untouched, trailing whitespace included. The
/// diagnosis is trimmed and loses a single closing `]`. A completion
/// without the marker falls back to `(completion, "")`.
pub fn parse_case(raw_completion: &str) -> ParsedCase {
    let Some((narrative, payload)) = raw_completion.split_once(DIAGNOSIS_MARKER) else {
        warn!(
            completion_len = raw_completion.len(),
            "case completion has no diagnosis marker; diagnosis left empty"
        );
        return ParsedCase {
            narrative: raw_completion.to_string(),
            diagnosis: String::new(),
            marker_found: false,
        };
    };

    let payload = payload.trim();
    let diagnosis = payload.strip_suffix(']').unwrap_or(payload).trim();

    ParsedCase {
        narrative: narrative.to_string(),
        diagnosis: diagnosis.to_string(),
        marker_found: true,
    }
}
