//! Exam processing orchestrator.
//!
//! Drives the whole pipeline for one document:
//! extract text → analyze (metadata + lab values) → assess → render report.
//! Export and persistence stay with the caller.

use std::path::Path;

use serde::Serialize;

use crate::models::ParsedExam;
use crate::pipeline::diagnosis::DiagnosticReport;
use crate::pipeline::extraction::{DocumentExtractor, ExtractionError, ExtractionResult};
use crate::pipeline::structuring::analyze_exam_text;

/// Everything produced for one exam document.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedExam {
    pub extraction: ExtractionResult,
    pub parsed: ParsedExam,
    pub report: DiagnosticReport,
}

impl ProcessedExam {
    /// Rendered report text
    pub fn report_text(&self) -> String {
        self.report.to_string()
    }
}

pub struct ExamProcessor {
    extractor: DocumentExtractor,
}

impl Default for ExamProcessor {
    fn default() -> Self {
        Self::new(DocumentExtractor::default())
    }
}

impl ExamProcessor {
    pub fn new(extractor: DocumentExtractor) -> Self {
        Self { extractor }
    }

    pub fn process_file(&self, path: &Path) -> Result<ProcessedExam, ExtractionError> {
        let extraction = self.extractor.extract_file(path)?;
        Ok(Self::finish(extraction))
    }

    pub fn process_bytes(&self, bytes: &[u8]) -> Result<ProcessedExam, ExtractionError> {
        let extraction = self.extractor.extract(bytes)?;
        Ok(Self::finish(extraction))
    }

    /// Analysis and reporting cannot fail once text is available.
    fn finish(extraction: ExtractionResult) -> ProcessedExam {
        let parsed = analyze_exam_text(&extraction.full_text);
        let report = DiagnosticReport::from_exam(&parsed);

        tracing::info!(
            diagnoses = report.assessment.diagnoses.len(),
            recommendations = report.assessment.recommendations.len(),
            "Exam processed"
        );

        ProcessedExam {
            extraction,
            parsed,
            report,
        }
    }
}
