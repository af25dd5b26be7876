use serde::{Deserialize, Serialize};

/// A generated clinical vignette and its ground-truth diagnosis label.
///
/// The diagnosis is whatever text the model put inside the diagnosis
/// marker. It is not a coded medical concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub narrative: String,
    pub diagnosis: String,
}

impl Case {
    /// Whether a diagnosis label was recovered from the model output.
    pub fn has_diagnosis(&self) -> bool {
        !self.diagnosis.trim().is_empty()
    }
}
