use serde::{Deserialize, Serialize};

/// Input kinds the extractor accepts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    Pdf,
    PlainText,
    Unsupported,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::PlainText => "plain_text",
            Self::Unsupported => "unsupported",
        }
    }
}

const PDF_MAGIC: &[u8] = b"%PDF";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Detect the input format from its bytes, not its file name.
pub fn detect_format(bytes: &[u8]) -> SourceFormat {
    if bytes.starts_with(PDF_MAGIC) {
        return SourceFormat::Pdf;
    }
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(body) {
        Ok(text) if !text.contains('\0') => SourceFormat::PlainText,
        _ => SourceFormat::Unsupported,
    }
}
