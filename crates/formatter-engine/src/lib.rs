//! Input normalization for contract generation
//!
//! Converts raw operator input into the canonical textual forms the
//! contract templates expect: uppercased names, punctuated CPF and OAB
//! numbers, abbreviated street addresses, title-cased city names,
//! gender-agreed marital status and long-form Portuguese dates.
//!
//! Every operation is total: malformed input degrades to a best-effort
//! passthrough instead of an error. Strict validation (digit counts,
//! recognized state codes) is the caller's job.

pub mod address;
pub mod civil;
pub mod date;
pub mod identity;
pub mod locality;
pub mod name;
pub mod tables;

pub use date::FormattedDate;
pub use tables::{FormatTables, MaritalEntry};

use shared_types::Gender;

/// Normalizer facade over a fixed table set.
///
/// Tables are injected at construction so tests can run with alternate
/// abbreviations or status entries; `Default` carries the Brazilian
/// production tables.
pub struct Formatter {
    tables: FormatTables,
}

impl Formatter {
    pub fn new(tables: FormatTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &FormatTables {
        &self.tables
    }

    /// Collapse internal whitespace and uppercase the whole name.
    pub fn format_full_name(&self, raw: &str) -> String {
        name::format_full_name(raw)
    }

    /// Heuristic gender inference from the first name. Approximate by
    /// design: a suffix list, no dictionary.
    pub fn infer_gender(&self, full_name: &str) -> Gender {
        name::infer_gender(&self.tables, full_name)
    }

    /// Canonical CPF form `000.000.000-00`; anything that does not strip
    /// down to 11 digits is returned digit-stripped and unformatted.
    pub fn format_cpf(&self, raw: &str) -> String {
        identity::format_cpf(raw)
    }

    /// Canonical OAB form `000.000`; anything that does not strip down to
    /// 6 digits is returned digit-stripped and unformatted.
    pub fn format_oab(&self, raw: &str) -> String {
        identity::format_oab(raw)
    }

    /// Street address with standard abbreviations applied and the
    /// remaining tokens capitalized.
    pub fn format_address(&self, raw: &str) -> String {
        address::format_address(&self.tables, raw)
    }

    /// Title-cased city name with lowercase connectors (de, da, do, ...).
    pub fn format_city(&self, raw: &str) -> String {
        locality::format_city(&self.tables, raw)
    }

    /// Trimmed, uppercased state code. Unrecognized codes pass through.
    pub fn format_state_code(&self, raw: &str) -> String {
        locality::format_state_code(raw)
    }

    /// Gender-agreed marital status, lowercased.
    pub fn format_marital_status(&self, raw: &str, gender: Gender) -> String {
        civil::format_marital_status(&self.tables, raw, gender)
    }

    /// Long-form Portuguese date ("23 de dezembro de 2025"). Empty or
    /// unparseable input falls back to the current date; the returned
    /// flag says whether that fallback fired.
    pub fn format_signing_date(&self, raw: &str) -> FormattedDate {
        date::format_signing_date(&self.tables, raw)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(FormatTables::brazilian())
    }
}

/// Uppercase the first character and lowercase the rest.
pub(crate) fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
