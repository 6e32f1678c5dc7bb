use serde::{Deserialize, Serialize};

use crate::models::{LabKey, LabValues};

/// Diagnosis entry used when no rule produced a diagnosis.
pub const NO_CRITICAL_FINDINGS: &str = "Sem alterações críticas detectadas.";

/// Strict comparison against a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    Below(f64),
    Above(f64),
}

impl Threshold {
    /// A value sitting exactly on the threshold never triggers.
    pub fn is_met(&self, value: f64) -> bool {
        match *self {
            Threshold::Below(limit) => value < limit,
            Threshold::Above(limit) => value > limit,
        }
    }
}

/// One PCDT rule: a lab threshold with what it adds to the report.
#[derive(Debug, Clone, Copy)]
pub struct ClinicalRule {
    pub key: LabKey,
    pub threshold: Threshold,
    pub diagnosis: Option<&'static str>,
    pub recommendation: &'static str,
}

/// Rules in report order.
pub const PCDT_RULES: &[ClinicalRule] = &[
    ClinicalRule {
        key: LabKey::Hemoglobin,
        threshold: Threshold::Below(10.0),
        diagnosis: Some("Anemia da DRC"),
        recommendation: "Iniciar alfaepoetina e avaliar ferro sérico.",
    },
    ClinicalRule {
        key: LabKey::Ferritin,
        threshold: Threshold::Below(100.0),
        diagnosis: None,
        recommendation: "Reposição de ferro (ex: sacarato férrico).",
    },
    ClinicalRule {
        key: LabKey::Pth,
        threshold: Threshold::Above(600.0),
        diagnosis: Some("Hiperparatireoidismo secundário"),
        recommendation: "Avaliar uso de paricalcitol e/ou cinacalcete.",
    },
    ClinicalRule {
        key: LabKey::Phosphorus,
        threshold: Threshold::Above(5.5),
        diagnosis: None,
        recommendation: "Iniciar quelante de fósforo (ex: sevelamer).",
    },
    ClinicalRule {
        key: LabKey::VitaminD,
        threshold: Threshold::Below(20.0),
        diagnosis: None,
        recommendation: "Suplementar vitamina D (calcitriol ou colecalciferol).",
    },
];

/// Probable diagnoses and suggested actions for one exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(rename = "diagnosticos")]
    pub diagnoses: Vec<String>,
    #[serde(rename = "condutas")]
    pub recommendations: Vec<String>,
}

/// Apply every rule independently. Missing values skip their rule.
pub fn assess(values: &LabValues) -> Assessment {
    let mut diagnoses = Vec::new();
    let mut recommendations = Vec::new();

    for rule in PCDT_RULES {
        let Some(value) = values.get(rule.key) else {
            continue;
        };
        if !rule.threshold.is_met(value) {
            continue;
        }
        tracing::debug!(key = rule.key.as_str(), value, "PCDT rule triggered");
        if let Some(diagnosis) = rule.diagnosis {
            diagnoses.push(diagnosis.to_string());
        }
        recommendations.push(rule.recommendation.to_string());
    }

    if diagnoses.is_empty() {
        diagnoses.push(NO_CRITICAL_FINDINGS.to_string());
    }

    Assessment {
        diagnoses,
        recommendations,
    }
}
