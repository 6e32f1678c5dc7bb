use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run, Style, StyleType};

use super::{ExportError, REPORT_TITLE};

const HEADING_STYLE: &str = "Heading1";

/// Render report text as a DOCX: a level-1 heading, then one paragraph
/// per report line (blank lines included).
pub fn render_report_docx(text: &str) -> Result<Vec<u8>, ExportError> {
    let heading_style = Style::new(HEADING_STYLE, StyleType::Paragraph)
        .name("Heading 1")
        .size(32)
        .bold();

    let mut docx = Docx::new().add_style(heading_style).add_paragraph(
        Paragraph::new()
            .style(HEADING_STYLE)
            .add_run(Run::new().add_text(REPORT_TITLE)),
    );

    let mut paragraphs = 0usize;
    for line in text.split('\n') {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
        paragraphs += 1;
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(paragraphs, "Rendered report DOCX");
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::DocumentChild;

    fn paragraph_count(bytes: &[u8]) -> usize {
        let docx = docx_rs::read_docx(bytes).unwrap();
        docx.document
            .children
            .iter()
            .filter(|c| matches!(c, DocumentChild::Paragraph(_)))
            .count()
    }

    #[test]
    fn output_is_a_zip_container() {
        let bytes = render_report_docx("Paciente: Test").unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));
    }

    #[test]
    fn heading_plus_one_paragraph_per_line() {
        let bytes = render_report_docx("Paciente: Test\nIdade: 60\n\nDiagnósticos prováveis:").unwrap();
        assert_eq!(paragraph_count(&bytes), 5);
    }

    #[test]
    fn empty_text_still_has_heading() {
        let bytes = render_report_docx("").unwrap();
        assert_eq!(paragraph_count(&bytes), 2);
    }
}
