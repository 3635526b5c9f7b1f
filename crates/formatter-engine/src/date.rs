//! Signing-date parsing and long-form Portuguese formatting

use crate::tables::FormatTables;
use chrono::{Datelike, Local, NaiveDate};

/// Accepted input patterns, tried in order.
const DATE_PATTERNS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];

/// A formatted signing date.
///
/// `defaulted` is true when the input was empty or unparseable and the
/// current date was used instead, so callers can warn the operator
/// without losing the fallback behavior.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormattedDate {
    pub text: String,
    pub defaulted: bool,
}

/// Format a raw date input as "23 de dezembro de 2025".
///
/// Tries day-first patterns with `/`, `-` and `.` separators, then ISO
/// year-first. Empty or unrecognized input falls back to today; this
/// never fails.
pub fn format_signing_date(tables: &FormatTables, raw: &str) -> FormattedDate {
    let trimmed = raw.trim();

    let parsed = DATE_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(trimmed, pattern).ok());

    let (date, defaulted) = match parsed {
        Some(date) => (date, false),
        None => (Local::now().date_naive(), true),
    };

    FormattedDate {
        text: long_form(tables, date),
        defaulted,
    }
}

/// "23 de dezembro de 2025", day unpadded.
pub fn long_form(tables: &FormatTables, date: NaiveDate) -> String {
    let month = &tables.months[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slash_separated_date() {
        let tables = FormatTables::brazilian();
        let formatted = format_signing_date(&tables, "23/12/2025");
        assert_eq!(formatted.text, "23 de dezembro de 2025");
        assert!(!formatted.defaulted);
    }

    #[test]
    fn test_alternate_separators() {
        let tables = FormatTables::brazilian();
        assert_eq!(
            format_signing_date(&tables, "01-03-2026").text,
            "1 de março de 2026"
        );
        assert_eq!(
            format_signing_date(&tables, "07.09.2025").text,
            "7 de setembro de 2025"
        );
    }

    #[test]
    fn test_iso_year_first() {
        let tables = FormatTables::brazilian();
        assert_eq!(
            format_signing_date(&tables, "2025-12-23").text,
            "23 de dezembro de 2025"
        );
    }

    #[test]
    fn test_empty_input_defaults_to_today() {
        let tables = FormatTables::brazilian();
        let formatted = format_signing_date(&tables, "");
        assert!(formatted.defaulted);
        assert_eq!(formatted.text, long_form(&tables, Local::now().date_naive()));
    }

    #[test]
    fn test_garbage_input_defaults_to_today() {
        let tables = FormatTables::brazilian();
        let formatted = format_signing_date(&tables, "amanhã");
        assert!(formatted.defaulted);
        assert!(formatted.text.contains(" de "));
    }

    #[test]
    fn test_day_is_unpadded() {
        let tables = FormatTables::brazilian();
        assert_eq!(
            format_signing_date(&tables, "05/01/2026").text,
            "5 de janeiro de 2026"
        );
    }
}
