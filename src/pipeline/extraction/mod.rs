pub mod format;
pub mod orchestrator;
pub mod pdf;
pub mod sanitize;
pub mod types;

pub use format::*;
pub use orchestrator::*;
pub use pdf::*;
pub use sanitize::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to extract text from PDF: {0}")]
    PdfParsing(String),

    #[error("Text encoding error: {0}")]
    EncodingError(String),

    #[error("Unsupported format for extraction")]
    UnsupportedFormat,
}
