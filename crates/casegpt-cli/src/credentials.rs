use thiserror::Error;

/// Environment variable holding the OpenAI API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("{0} not found in environment variables")]
    Missing(&'static str),
}

/// Accept an API key read from the environment. Unset and blank values are
/// both treated as missing.
pub fn require_api_key(value: Option<String>) -> Result<String, CredentialError> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(CredentialError::Missing(API_KEY_VAR)),
    }
}

/// Short form of a secret that is safe to log.
pub fn redact_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}
