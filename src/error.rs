//! Error handling for the job copilot

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopilotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, CopilotError>;

impl From<regex::Error> for CopilotError {
    fn from(err: regex::Error) -> Self {
        CopilotError::Processing(format!("Invalid pattern: {}", err))
    }
}
