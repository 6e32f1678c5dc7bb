//! Report exports: paginated PDF and paragraph-per-line DOCX.

pub mod docx;
pub mod pdf;

pub use docx::*;
pub use pdf::*;

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Title used for exported documents
pub const REPORT_TITLE: &str = "Relatório PCDT - Análise de Exames";

pub const DEFAULT_PDF_NAME: &str = "relatorio_pcdt.pdf";
pub const DEFAULT_DOCX_NAME: &str = "relatorio_pcdt.docx";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write exported bytes into `dir` (created if missing). Returns the file path.
pub fn export_to_file(bytes: &[u8], dir: &Path, filename: &str) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), size = bytes.len(), "Report exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports").join("2024");

        let path = export_to_file(b"conteudo", &target, DEFAULT_PDF_NAME).unwrap();

        assert_eq!(path, target.join("relatorio_pcdt.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"conteudo");
    }

    #[test]
    fn export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        export_to_file(b"primeiro", dir.path(), DEFAULT_DOCX_NAME).unwrap();
        let path = export_to_file(b"segundo", dir.path(), DEFAULT_DOCX_NAME).unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"segundo");
    }
}
