pub mod lab_values;
pub mod metadata;

pub use lab_values::*;
pub use metadata::*;

use crate::models::ParsedExam;

/// Run both extractors over the same document text.
pub fn analyze_exam_text(text: &str) -> ParsedExam {
    let values = extract_lab_values(text);
    let metadata = extract_metadata(text);

    tracing::info!(
        values_found = values.present().count(),
        name_found = metadata.name != crate::models::NAME_NOT_FOUND,
        "Exam text analyzed"
    );

    ParsedExam { metadata, values }
}
