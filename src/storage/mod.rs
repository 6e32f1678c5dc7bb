//! Remote persistence of generated reports.

pub mod supabase;

pub use supabase::*;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Metadata;
use crate::pipeline::diagnosis::summarize_report;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Report store is not reachable at {0}")]
    Connection(String),

    #[error("Report store returned error (status {status}): {body}")]
    Remote { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// One persisted report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub nome: String,
    pub idade: String,
    pub modalidade: String,
    pub resumo: String,
    pub conteudo: String,
    pub data_registro: NaiveDateTime,
}

impl ReportRecord {
    pub fn new(metadata: &Metadata, report: &str, registered_at: NaiveDateTime) -> Self {
        Self {
            nome: metadata.name.clone(),
            idade: metadata.age.clone(),
            modalidade: metadata.modality.clone(),
            resumo: summarize_report(report),
            conteudo: report.to_string(),
            data_registro: registered_at,
        }
    }
}

/// Storage backend abstraction (allows mocking for tests)
pub trait ReportStore {
    fn insert(&self, record: &ReportRecord) -> Result<(), StoreError>;
}

/// Build a record for `report` stamped with the current local time and insert it.
/// Store failures are returned unchanged; nothing is retried.
pub fn register_report(
    store: &dyn ReportStore,
    metadata: &Metadata,
    report: &str,
) -> Result<ReportRecord, StoreError> {
    let record = ReportRecord::new(metadata, report, Local::now().naive_local());
    store.insert(&record)?;
    tracing::info!(resumo = %record.resumo, "Report registered");
    Ok(record)
}
