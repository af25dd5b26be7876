use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model request failed: {0}")]
    Transport(String),

    #[error("model API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("model returned an empty completion")]
    EmptyCompletion,

    #[error("prompt template error: {0}")]
    Prompt(String),
}

impl From<tera::Error> for ModelError {
    fn from(e: tera::Error) -> Self {
        ModelError::Prompt(e.to_string())
    }
}
