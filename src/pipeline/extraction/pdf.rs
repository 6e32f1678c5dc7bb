use super::types::{PageExtraction, PdfExtractor};
use super::ExtractionError;

/// PDF text extractor using the pdf-extract crate.
/// Reads the embedded text layer; scanned pages come back empty.
pub struct PdfTextExtractor;

impl PdfExtractor for PdfTextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<Vec<PageExtraction>, ExtractionError> {
        if pdf_bytes.is_empty() {
            return Err(ExtractionError::PdfParsing("empty document".into()));
        }

        let page_texts = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

        Ok(page_texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageExtraction {
                page_number: i + 1,
                text,
            })
            .collect())
    }
}


#[cfg(test)]
mod tests {
    use super::test_pdf::make_test_pdf;
    use super::*;

    #[test]
    fn extract_text_from_digital_pdf() {
        let pdf_bytes = make_test_pdf(&["Hemoglobina: 10.5 g/dL"]);
        let pages = PdfTextExtractor.extract_text(&pdf_bytes).unwrap();

        assert_eq!(pages.len(), 1);
        assert!(
            pages[0].text.contains("Hemoglobina"),
            "unexpected text: {}",
            pages[0].text
        );
    }

    #[test]
    fn multipage_pdf_keeps_page_order() {
        let pdf_bytes = make_test_pdf(&["Page 1: Patient Information", "Page 2: Lab Results"]);
        let pages = PdfTextExtractor.extract_text(&pdf_bytes).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert!(pages[0].text.contains("Page 1"));
        assert!(pages[1].text.contains("Page 2"));
    }

    #[test]
    fn invalid_pdf_returns_error() {
        let err = PdfTextExtractor.extract_text(b"This is not a PDF file").unwrap_err();
        assert!(err.to_string().contains("Failed to extract text from PDF"));
    }

    #[test]
    fn empty_input_returns_error() {
        let err = PdfTextExtractor.extract_text(b"").unwrap_err();
        assert!(matches!(err, ExtractionError::PdfParsing(_)));
    }
}
