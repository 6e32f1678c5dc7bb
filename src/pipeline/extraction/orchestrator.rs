use std::path::Path;

use super::format::{detect_format, SourceFormat};
use super::pdf::PdfTextExtractor;
use super::sanitize::sanitize_extracted_text;
use super::types::{ExtractionMethod, ExtractionResult, PageExtraction, PdfExtractor};
use super::ExtractionError;

/// Turns an uploaded exam (PDF or plain text) into raw text.
/// The PDF backend is a trait object so tests can inject a mock.
pub struct DocumentExtractor {
    pdf_extractor: Box<dyn PdfExtractor + Send + Sync>,
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self::new(Box::new(PdfTextExtractor))
    }
}

impl DocumentExtractor {
    pub fn new(pdf_extractor: Box<dyn PdfExtractor + Send + Sync>) -> Self {
        Self { pdf_extractor }
    }

    /// Read a file from disk and extract its text.
    pub fn extract_file(&self, path: &Path) -> Result<ExtractionResult, ExtractionError> {
        let bytes = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "Read source document");
        self.extract(&bytes)
    }

    pub fn extract(&self, bytes: &[u8]) -> Result<ExtractionResult, ExtractionError> {
        let format = detect_format(bytes);
        tracing::info!(format = format.as_str(), size = bytes.len(), "Starting text extraction");

        let (method, pages) = match format {
            SourceFormat::Pdf => {
                let pages = self.pdf_extractor.extract_text(bytes)?;
                (ExtractionMethod::PdfDirect, pages)
            }
            SourceFormat::PlainText => {
                let text = String::from_utf8_lossy(bytes)
                    .trim_start_matches('\u{FEFF}')
                    .to_string();
                let page = PageExtraction {
                    page_number: 1,
                    text,
                };
                (ExtractionMethod::PlainTextRead, vec![page])
            }
            SourceFormat::Unsupported => return Err(ExtractionError::UnsupportedFormat),
        };

        // Only PDF text layers are cleaned up; plain text reaches analysis as written.
        let pages: Vec<PageExtraction> = match method {
            ExtractionMethod::PdfDirect => pages
                .into_iter()
                .map(|p| PageExtraction {
                    page_number: p.page_number,
                    text: sanitize_extracted_text(&p.text),
                })
                .collect(),
            ExtractionMethod::PlainTextRead => pages,
        };

        let full_text = pages
            .iter()
            .map(|p| p.text.as_str())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        if full_text.is_empty() {
            tracing::warn!(
                method = method.as_str(),
                pages = pages.len(),
                "No text extracted; the document may be scanned or empty"
            );
        }

        tracing::info!(
            method = method.as_str(),
            page_count = pages.len(),
            text_length = full_text.len(),
            "Text extraction complete"
        );

        Ok(ExtractionResult {
            method,
            page_count: pages.len(),
            pages,
            full_text,
        })
    }
}
