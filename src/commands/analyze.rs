use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

use super::CliError;
use crate::config::{exports_dir, StoreConfig};
use crate::export::{
    export_to_file, render_report_docx, render_report_pdf, DEFAULT_DOCX_NAME, DEFAULT_PDF_NAME,
};
use crate::models::LabValues;
use crate::pipeline::processor::{ExamProcessor, ProcessedExam};
use crate::storage::{register_report, SupabaseClient};

#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub file: PathBuf,
    pub json: bool,
    /// `Some(None)` exports to the default location.
    pub pdf: Option<Option<PathBuf>>,
    pub docx: Option<Option<PathBuf>>,
    pub save: bool,
}

pub fn run(opts: &AnalyzeOptions) -> Result<(), CliError> {
    // Fail on missing store settings before doing any work.
    let store_config = if opts.save {
        Some(StoreConfig::from_env()?)
    } else {
        None
    };

    let exam = ExamProcessor::default().process_file(&opts.file)?;
    let report = exam.report_text();

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&analysis_json(&exam))?);
    } else {
        print!("{}", render_summary(&exam));
    }

    if let Some(target) = &opts.pdf {
        let (dir, name) = export_target(target.as_deref(), DEFAULT_PDF_NAME);
        let path = export_to_file(&render_report_pdf(&report)?, &dir, &name)?;
        eprintln!("PDF exportado: {}", path.display());
    }

    if let Some(target) = &opts.docx {
        let (dir, name) = export_target(target.as_deref(), DEFAULT_DOCX_NAME);
        let path = export_to_file(&render_report_docx(&report)?, &dir, &name)?;
        eprintln!("DOCX exportado: {}", path.display());
    }

    if let Some(config) = &store_config {
        let store = SupabaseClient::from_config(config)?;
        register_report(&store, &exam.parsed.metadata, &report)?;
        eprintln!("Relatório registrado em {}", config.table);
    }

    Ok(())
}

/// Patient data, detected lab values and the report, as printed to the terminal.
pub fn render_summary(exam: &ProcessedExam) -> String {
    let meta = &exam.parsed.metadata;
    let mut out = String::new();

    let _ = writeln!(out, "Dados do paciente");
    let _ = writeln!(out, "  Nome: {}", meta.name);
    let _ = writeln!(out, "  Idade: {}", meta.age);
    let _ = writeln!(out, "  Modalidade: {}", meta.modality);
    let _ = writeln!(out);

    let _ = writeln!(out, "Valores laboratoriais");
    if exam.parsed.values.is_empty() {
        let _ = writeln!(out, "  Nenhum valor identificado");
    }
    for (key, value) in exam.parsed.values.present() {
        let _ = writeln!(out, "  {}: {} {}", key.label(), value, key.unit());
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", exam.report_text());
    out
}

/// JSON document with `meta`, `dados` (detected values only) and `relatorio`.
pub fn analysis_json(exam: &ProcessedExam) -> Value {
    json!({
        "meta": exam.parsed.metadata,
        "dados": present_values(&exam.parsed.values),
        "relatorio": exam.report_text(),
    })
}

fn present_values(values: &LabValues) -> Value {
    let map: Map<String, Value> = values
        .present()
        .map(|(key, value)| (key.as_str().to_string(), json!(value)))
        .collect();
    Value::Object(map)
}

/// Split an optional user path into (directory, file name), falling back to
/// the exports directory and the default file name.
fn export_target(path: Option<&Path>, default_name: &str) -> (PathBuf, String) {
    let Some(path) = path else {
        return (exports_dir(), default_name.to_string());
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| default_name.to_string());
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    (dir, name)
}
