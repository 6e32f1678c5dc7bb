use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "PCDT Diálise Assistente";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Remote table that receives generated reports
pub const REPORT_TABLE: &str = "relatorios_pcdt";

const ENV_STORE_URL: &str = "SUPABASE_URL";
const ENV_STORE_KEY: &str = "SUPABASE_KEY";
const ENV_STORE_TABLE: &str = "SUPABASE_TABLE";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid store URL (expected http:// or https://): {0}")]
    InvalidUrl(String),
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "pcdt_lib=info"
}

/// Application data directory: ~/PCDT/ on all platforms.
/// Falls back to the working directory when no home directory is known.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("PCDT")
}

/// Default destination for exported PDF/DOCX reports
pub fn exports_dir() -> PathBuf {
    app_data_dir().join("exports")
}

/// Connection settings for the remote report store.
///
/// Built once at startup and handed by reference to whoever persists
/// reports; there is no process-wide client.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub url: String,
    pub api_key: String,
    pub table: String,
}

impl StoreConfig {
    pub fn new(url: &str, api_key: &str, table: &str) -> Result<Self, ConfigError> {
        let url = url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(url.to_string()));
        }
        Ok(Self {
            url: url.to_string(),
            api_key: api_key.trim().to_string(),
            table: table.to_string(),
        })
    }

    /// Read `SUPABASE_URL`, `SUPABASE_KEY` and optional `SUPABASE_TABLE`.
    /// A `.env` file in the working directory is honoured if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "No .env file loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(ENV_STORE_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar(ENV_STORE_URL))?;
        let key = lookup(ENV_STORE_KEY)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar(ENV_STORE_KEY))?;
        let table = lookup(ENV_STORE_TABLE)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| REPORT_TABLE.to_string());
        Self::new(&url, &key, &table)
    }
}
