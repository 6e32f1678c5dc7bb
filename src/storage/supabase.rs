use std::time::Duration;

use super::{ReportRecord, ReportStore, StoreError};
use crate::config::StoreConfig;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Blocking client for a Supabase (PostgREST) table.
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    table: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl SupabaseClient {
    pub fn new(config: &StoreConfig, timeout_secs: u64) -> Result<Self, StoreError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| StoreError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            table: config.table.clone(),
            client,
            timeout_secs,
        })
    }

    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        Self::new(config, DEFAULT_TIMEOUT_SECS)
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

impl ReportStore for SupabaseClient {
    fn insert(&self, record: &ReportRecord) -> Result<(), StoreError> {
        let url = self.table_url();
        tracing::debug!(url = %url, "Inserting report record");

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    StoreError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    StoreError::HttpClient(format!(
                        "Request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    StoreError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Report store rejected insert");
            return Err(StoreError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
