pub mod commands;
pub mod config;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod storage;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::{Cli, CliError};

pub fn run() -> Result<(), CliError> {
    // Logs go to stderr so report output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    commands::dispatch(Cli::parse())
}
