//! Full-name normalization and the first-name gender heuristic

use crate::tables::FormatTables;
use shared_types::Gender;

/// Collapse internal whitespace and uppercase. Empty input stays empty.
pub fn format_full_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Guess the grammatical gender from the first name's ending.
///
/// Approximate: checks the lowercased first token against the configured
/// feminine suffixes. Defaults to masculine, including for empty input.
pub fn infer_gender(tables: &FormatTables, full_name: &str) -> Gender {
    let first = match full_name.split_whitespace().next() {
        Some(token) => token.to_lowercase(),
        None => return Gender::Masculine,
    };

    if tables
        .feminine_suffixes
        .iter()
        .any(|suffix| first.ends_with(suffix.as_str()))
    {
        Gender::Feminine
    } else {
        Gender::Masculine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercases_and_collapses_whitespace() {
        assert_eq!(format_full_name("  joão   da  silva "), "JOÃO DA SILVA");
    }

    #[test]
    fn test_empty_name_stays_empty() {
        assert_eq!(format_full_name(""), "");
        assert_eq!(format_full_name("   "), "");
    }

    #[test]
    fn test_feminine_endings() {
        let tables = FormatTables::brazilian();
        assert_eq!(infer_gender(&tables, "MARIA SANTOS"), Gender::Feminine);
        assert_eq!(infer_gender(&tables, "Simone Costa"), Gender::Feminine);
    }

    #[test]
    fn test_masculine_endings() {
        let tables = FormatTables::brazilian();
        assert_eq!(infer_gender(&tables, "JOÃO SILVA"), Gender::Masculine);
        assert_eq!(infer_gender(&tables, "MARCOS LIMA"), Gender::Masculine);
    }

    #[test]
    fn test_empty_name_defaults_to_masculine() {
        let tables = FormatTables::brazilian();
        assert_eq!(infer_gender(&tables, ""), Gender::Masculine);
    }
}
