/// Clean text coming out of an extractor before it reaches the pattern matchers.
/// Drops control characters, maps non-breaking spaces to plain spaces
/// (names are matched word by word on single spaces), trims each line and
/// removes blank lines.
pub fn sanitize_extracted_text(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            '\n' => Some('\n'),
            '\t' | '\u{00A0}' | '\u{202F}' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect::<String>()
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_null_bytes() {
        let clean = sanitize_extracted_text("Paciente: Maria\x00 Dubois");
        assert_eq!(clean, "Paciente: Maria Dubois");
    }

    #[test]
    fn strips_control_characters() {
        let clean = sanitize_extracted_text("PTH: 720 pg/mL\x01\x02\x03\nData: 2024-01-15");
        assert_eq!(clean, "PTH: 720 pg/mL\nData: 2024-01-15");
    }

    #[test]
    fn carriage_returns_removed() {
        assert_eq!(sanitize_extracted_text("Idade: 65\r\nNome"), "Idade: 65\nNome");
    }

    #[test]
    fn non_breaking_spaces_become_spaces() {
        let clean = sanitize_extracted_text("Paciente: João\u{00A0}Silva");
        assert_eq!(clean, "Paciente: João Silva");
    }

    #[test]
    fn preserves_units_and_accents() {
        let raw = "Cálcio: 9,2 mg/dL; Saturação: 35 % (µg/L)";
        assert_eq!(sanitize_extracted_text(raw), raw);
    }

    #[test]
    fn collapses_blank_lines_and_trims() {
        let raw = "  Linha um  \n\n\n\tLinha dois\n\n";
        assert_eq!(sanitize_extracted_text(raw), "Linha um\nLinha dois");
    }

    #[test]
    fn empty_and_control_only_input() {
        assert_eq!(sanitize_extracted_text(""), "");
        assert_eq!(sanitize_extracted_text("\x00\x01\x02"), "");
    }
}
