//! Street-address normalization

use crate::capitalize_word;
use crate::tables::FormatTables;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SPACE_BEFORE_COMMA: Regex = Regex::new(r"\s+,").unwrap();
}

/// Apply standard street-type and unit-type abbreviations and capitalize
/// the remaining tokens.
///
/// The whole input is lowercased first, so the abbreviation lookup is
/// case-insensitive but exact-token only: "avenida" maps, "avenida," does
/// not (the comma stays with the token and the word is capitalized
/// instead).
pub fn format_address(tables: &FormatTables, raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let lowered = collapsed.to_lowercase();

    let formatted: Vec<String> = lowered
        .split_whitespace()
        .map(|token| match tables.abbreviations.get(token) {
            Some(abbrev) => abbrev.clone(),
            None => capitalize_word(token),
        })
        .collect();

    SPACE_BEFORE_COMMA
        .replace_all(&formatted.join(" "), ",")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_abbreviates_and_capitalizes() {
        let tables = FormatTables::brazilian();
        assert_eq!(
            format_address(&tables, "av paulista, 123, apto 101"),
            "Av. Paulista, 123, apto 101"
        );
    }

    #[test]
    fn test_full_street_type_word() {
        let tables = FormatTables::brazilian();
        assert_eq!(
            format_address(&tables, "RUA DOS ANDRADAS, 1001"),
            "R. Dos Andradas, 1001"
        );
    }

    #[test]
    fn test_collapses_extra_whitespace() {
        let tables = FormatTables::brazilian();
        assert_eq!(
            format_address(&tables, "  avenida   carlos gomes ,  258 "),
            "Av. Carlos Gomes, 258"
        );
    }

    #[test]
    fn test_empty_address() {
        let tables = FormatTables::brazilian();
        assert_eq!(format_address(&tables, ""), "");
    }

    #[test]
    fn test_unit_words_stay_lowercase() {
        let tables = FormatTables::brazilian();
        assert_eq!(
            format_address(&tables, "rua x, 10, bloco b, sala 2"),
            "R. X, 10, bl. B, sala 2"
        );
    }
}
