use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("message {message_index} contains a character the PDF font cannot encode: {character:?}")]
    Encoding { message_index: usize, character: char },

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}
