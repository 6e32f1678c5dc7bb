use std::sync::LazyLock;

use regex::Regex;

use crate::models::{LabKey, LabValues};

/// Accent-tolerant label for each measurement (matched case-insensitively).
fn label_pattern(key: LabKey) -> &'static str {
    match key {
        LabKey::Hemoglobin => "hemoglobina",
        LabKey::Ferritin => "ferritina",
        LabKey::TransferrinSaturation => "transferrina",
        LabKey::Calcium => "c[aá]lcio",
        LabKey::Phosphorus => "f[oó]sforo",
        LabKey::Pth => "pth",
        LabKey::VitaminD => r"25.?\s*hidroxi.?vitamina\s*d",
    }
}

/// Label, then the first number after it, then the unit before any other digit.
fn value_regex(key: LabKey) -> Regex {
    let pattern = format!(
        r"(?i){}[^\d]*(\d+[.,]?\d*)[^\d]*{}",
        label_pattern(key),
        regex::escape(key.unit()),
    );
    Regex::new(&pattern).unwrap()
}

static VALUE_PATTERNS: LazyLock<Vec<(LabKey, Regex)>> = LazyLock::new(|| {
    LabKey::ALL
        .iter()
        .map(|key| (*key, value_regex(*key)))
        .collect()
});

/// Extract the seven lab measurements from raw exam text.
///
/// The first labelled occurrence in document order wins. Values that are
/// not present (or not followed by their unit) are left as `None`.
pub fn extract_lab_values(text: &str) -> LabValues {
    let mut values = LabValues::default();

    for (key, regex) in VALUE_PATTERNS.iter() {
        let Some(raw) = regex.captures(text).and_then(|c| c.get(1)) else {
            continue;
        };
        let value = parse_decimal(raw.as_str());
        match value {
            Some(v) => tracing::debug!(key = key.as_str(), value = v, "Lab value extracted"),
            None => tracing::warn!(
                key = key.as_str(),
                raw = raw.as_str(),
                "Matched lab value could not be parsed"
            ),
        }
        values.set(*key, value);
    }

    values
}

/// Parse a number that may use a comma as decimal separator.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok()
}
