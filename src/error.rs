//! Error handling for the resume match scorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Model loading error: {0}")]
    ModelLoading(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MatchError>;

/// Convert anyhow errors surfaced by the embedding loader to our error type
impl From<anyhow::Error> for MatchError {
    fn from(err: anyhow::Error) -> Self {
        // {:#} keeps the cause chain in the message
        MatchError::ModelLoading(format!("{:#}", err))
    }
}
