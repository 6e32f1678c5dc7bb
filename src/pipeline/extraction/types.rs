use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// Result of text extraction from a single document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub method: ExtractionMethod,
    pub pages: Vec<PageExtraction>,
    pub full_text: String,
    pub page_count: usize,
}

/// How text was extracted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    PdfDirect,
    PlainTextRead,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PdfDirect => "pdf_direct",
            Self::PlainTextRead => "plain_text_read",
        }
    }
}

/// Per-page extraction result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageExtraction {
    pub page_number: usize,
    pub text: String,
}

/// PDF text extraction abstraction (allows mocking for tests)
pub trait PdfExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<Vec<PageExtraction>, ExtractionError>;
}
