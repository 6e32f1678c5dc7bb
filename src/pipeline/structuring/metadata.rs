use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Metadata, AGE_NOT_FOUND, MODALITY_NOT_FOUND, NAME_NOT_FOUND};

/// Label followed by two or more capitalized words (accented capitals included).
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:Paciente|Nome)[\s:]*([A-ZÀ-Ú][a-zà-ú]+(?: [A-ZÀ-Ú][a-zà-ú]+)+)").unwrap()
});

static AGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Idade[\s:]*([0-9]{1,3})").unwrap());

/// A modality pattern with the name it is logged under.
struct ModalityPattern {
    regex: Regex,
    label: &'static str,
}

/// The earliest match in the text wins; list order breaks ties at the same
/// position. Hemodialysis must precede the generic form since it contains it.
static MODALITY_PATTERNS: LazyLock<Vec<ModalityPattern>> = LazyLock::new(|| {
    vec![
        ModalityPattern {
            regex: Regex::new(r"(?i)hemodi[aá]lise").unwrap(),
            label: "hemodialysis",
        },
        ModalityPattern {
            regex: Regex::new(r"(?i)di[aá]lise peritoneal").unwrap(),
            label: "peritoneal_dialysis",
        },
        ModalityPattern {
            regex: Regex::new(r"(?i)di[aá]lise").unwrap(),
            label: "dialysis",
        },
    ]
});

/// Pull patient name, age and treatment modality from raw exam text.
/// Missing fields fall back to their sentinel strings; this never fails.
pub fn extract_metadata(text: &str) -> Metadata {
    let name = NAME_PATTERN
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NAME_NOT_FOUND.to_string());

    let age = AGE_PATTERN
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| AGE_NOT_FOUND.to_string());

    let modality = detect_modality(text).unwrap_or_else(|| MODALITY_NOT_FOUND.to_string());

    Metadata {
        name,
        age,
        modality,
    }
}

fn detect_modality(text: &str) -> Option<String> {
    let (_, priority, m) = MODALITY_PATTERNS
        .iter()
        .enumerate()
        .filter_map(|(i, pattern)| pattern.regex.find(text).map(|m| (m.start(), i, m)))
        .min_by_key(|(start, i, _)| (*start, *i))?;

    tracing::debug!(modality = MODALITY_PATTERNS[priority].label, "Modality matched");
    Some(capitalize_first(m.as_str()))
}

/// Uppercase the first character, keep the rest as written.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_with_paciente_label() {
        let meta = extract_metadata("Paciente: João Silva Santos\nIdade: 65");
        assert_eq!(meta.name, "João Silva Santos");
    }

    #[test]
    fn name_with_nome_label() {
        let meta = extract_metadata("Nome: Maria Oliveira Costa\nIdade: 42");
        assert_eq!(meta.name, "Maria Oliveira Costa");
    }

    #[test]
    fn name_with_accented_words() {
        let meta = extract_metadata("Paciente: José Márcio Araújo\nIdade: 50");
        assert_eq!(meta.name, "José Márcio Araújo");
    }

    #[test]
    fn name_with_accented_capital() {
        let meta = extract_metadata("Nome: Ítalo Érico Lima");
        assert_eq!(meta.name, "Ítalo Érico Lima");
    }

    #[test]
    fn single_word_name_is_not_a_match() {
        let meta = extract_metadata("Nome: Teste\nIdade: 5");
        assert_eq!(meta.name, "Não identificado");
    }

    #[test]
    fn name_stops_at_line_break() {
        let meta = extract_metadata("Paciente: Ana Paula\nFernandes");
        assert_eq!(meta.name, "Ana Paula");
    }

    #[test]
    fn lowercase_after_label_is_not_a_name() {
        let meta = extract_metadata("Paciente em hemodiálise há 3 anos");
        assert_eq!(meta.name, "Não identificado");
    }

    #[test]
    fn missing_name() {
        let meta = extract_metadata("Idade: 50\nExames realizados em 15/03/2024");
        assert_eq!(meta.name, "Não identificado");
    }

    #[test]
    fn age_one_to_three_digits() {
        assert_eq!(extract_metadata("Nome: Teste\nIdade: 5").age, "5");
        assert_eq!(extract_metadata("Nome: Teste\nIdade: 65").age, "65");
        assert_eq!(extract_metadata("Nome: Teste\nIdade: 110").age, "110");
    }

    #[test]
    fn age_keeps_raw_digits() {
        assert_eq!(extract_metadata("Idade: 07").age, "07");
    }

    #[test]
    fn age_caps_at_three_digits() {
        assert_eq!(extract_metadata("Idade: 1234").age, "123");
    }

    #[test]
    fn missing_age() {
        let meta = extract_metadata("Nome: João Silva\nExames: diversos");
        assert_eq!(meta.age, "Não informada");
    }

    #[test]
    fn modality_hemodialysis_with_and_without_accent() {
        assert_eq!(
            extract_metadata("Paciente em hemodiálise há 3 anos").modality,
            "Hemodiálise"
        );
        assert_eq!(
            extract_metadata("Paciente em hemodialise há 3 anos").modality,
            "Hemodialise"
        );
    }

    #[test]
    fn modality_peritoneal() {
        let meta = extract_metadata("Tratamento: diálise peritoneal");
        assert_eq!(meta.modality, "Diálise peritoneal");
    }

    #[test]
    fn modality_keeps_remaining_case() {
        let meta = extract_metadata("Modalidade: Diálise Peritoneal");
        assert_eq!(meta.modality, "Diálise Peritoneal");
    }

    #[test]
    fn modality_generic() {
        assert_eq!(extract_metadata("Paciente em diálise").modality, "Diálise");
        assert_eq!(extract_metadata("PACIENTE EM DIALISE").modality, "DIALISE");
    }

    #[test]
    fn earliest_modality_mention_wins() {
        let meta = extract_metadata(
            "Modalidade: Diálise peritoneal (transferido da hemodiálise em 2022)",
        );
        assert_eq!(meta.modality, "Diálise peritoneal");

        let meta = extract_metadata("Encaminhado para diálise.\nModalidade: hemodiálise");
        assert_eq!(meta.modality, "Diálise");
    }

    #[test]
    fn peritoneal_preferred_over_generic_at_same_position() {
        let meta = extract_metadata("Em dialise peritoneal desde 2021");
        assert_eq!(meta.modality, "Dialise peritoneal");
    }

    #[test]
    fn missing_modality() {
        let meta = extract_metadata("Nome: João\nIdade: 50\nExames diversos");
        assert_eq!(meta.modality, "Não informada");
    }

    #[test]
    fn text_without_any_field_returns_sentinels() {
        let meta = extract_metadata("Resultados dos exames de laboratório");
        assert_eq!(meta, Metadata::default());
    }

    #[test]
    fn empty_text_returns_sentinels() {
        assert_eq!(extract_metadata(""), Metadata::default());
    }

    #[test]
    fn capitalize_handles_multibyte_first_char() {
        assert_eq!(capitalize_first("ález"), "Ález");
        assert_eq!(capitalize_first(""), "");
    }
}
