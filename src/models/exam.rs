use serde::{Deserialize, Serialize};

use super::lab::LabValues;

pub const NAME_NOT_FOUND: &str = "Não identificado";
pub const AGE_NOT_FOUND: &str = "Não informada";
pub const MODALITY_NOT_FOUND: &str = "Não informada";

/// Patient header fields. Each one holds its sentinel when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "nome")]
    pub name: String,
    /// Raw digit string as written in the document
    #[serde(rename = "idade")]
    pub age: String,
    #[serde(rename = "modalidade")]
    pub modality: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            name: NAME_NOT_FOUND.into(),
            age: AGE_NOT_FOUND.into(),
            modality: MODALITY_NOT_FOUND.into(),
        }
    }
}

/// Metadata and lab values taken from one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedExam {
    #[serde(rename = "meta")]
    pub metadata: Metadata,
    #[serde(rename = "dados")]
    pub values: LabValues,
}
