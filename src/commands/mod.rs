//! Command-line surface of the assistant.

pub mod analyze;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::pipeline::extraction::{DocumentExtractor, ExtractionError};
use crate::storage::StoreError;

#[derive(Parser, Debug)]
#[command(name = "pcdt")]
#[command(version, about = "Dialysis lab exam analysis against PCDT protocols")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print the text extracted from an exam document
    Extract {
        /// PDF or plain-text exam file
        file: PathBuf,
    },
    /// Analyze an exam and print the PCDT report
    Analyze {
        /// PDF or plain-text exam file
        file: PathBuf,
        /// Print a JSON document instead of text
        #[arg(long)]
        json: bool,
        /// Export the report as PDF (optional output path)
        #[arg(long, value_name = "PATH")]
        pdf: Option<Option<PathBuf>>,
        /// Export the report as DOCX (optional output path)
        #[arg(long, value_name = "PATH")]
        docx: Option<Option<PathBuf>>,
        /// Register the report in the remote store
        #[arg(long)]
        save: bool,
    },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Extract { file } => extract(&file),
        Command::Analyze {
            file,
            json,
            pdf,
            docx,
            save,
        } => analyze::run(&analyze::AnalyzeOptions {
            file,
            json,
            pdf,
            docx,
            save,
        }),
    }
}

fn extract(file: &Path) -> Result<(), CliError> {
    let result = DocumentExtractor::default().extract_file(file)?;
    tracing::info!(
        method = result.method.as_str(),
        pages = result.page_count,
        "Text extracted"
    );
    println!("{}", result.full_text);
    Ok(())
}
