use std::fmt;

use serde::Serialize;

use super::rules::{assess, Assessment};
use crate::models::{Metadata, ParsedExam};

pub const DIAGNOSES_HEADER: &str = "Diagnósticos prováveis:";
pub const RECOMMENDATIONS_HEADER: &str = "Condutas sugeridas:";
pub const NARRATIVE_HEADER: &str = "Evolução clínica automática:";

/// Summary used when a report has no bullet to summarize.
pub const DEFAULT_SUMMARY: &str = "Relatório gerado";

/// A rendered clinical report: patient header, assessment, narrative.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub metadata: Metadata,
    pub assessment: Assessment,
}

impl DiagnosticReport {
    pub fn from_exam(exam: &ParsedExam) -> Self {
        Self {
            metadata: exam.metadata.clone(),
            assessment: assess(&exam.values),
        }
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Paciente: {}", self.metadata.name)?;
        writeln!(f, "Idade: {}", self.metadata.age)?;
        writeln!(f, "Modalidade: {}", self.metadata.modality)?;

        write!(f, "\n{DIAGNOSES_HEADER}")?;
        for diagnosis in &self.assessment.diagnoses {
            write!(f, "\n- {diagnosis}")?;
        }

        // An empty recommendation list leaves the header with no bullets.
        write!(f, "\n\n{RECOMMENDATIONS_HEADER}")?;
        for recommendation in &self.assessment.recommendations {
            write!(f, "\n- {recommendation}")?;
        }

        write!(
            f,
            "\n\n{NARRATIVE_HEADER}\nPaciente em diálise com alterações laboratoriais compatíveis com {}. Seguir PCDT vigente.",
            self.assessment.diagnoses.join(", ")
        )
    }
}

/// Produce the textual report for a parsed exam.
pub fn generate_report(exam: &ParsedExam) -> String {
    DiagnosticReport::from_exam(exam).to_string()
}

/// One-line summary of a rendered report: its first bullet (the first
/// probable diagnosis), without the bullet marker.
pub fn summarize_report(report: &str) -> String {
    report
        .lines()
        .filter(|line| line.contains(DIAGNOSES_HEADER) || line.trim().starts_with('-'))
        .nth(1)
        .map(|line| {
            line.trim_matches(|c: char| c == '-' || c == ' ')
                .to_string()
        })
        .unwrap_or_else(|| DEFAULT_SUMMARY.to_string())
}
