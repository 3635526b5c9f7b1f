//! CPF and OAB number formatting

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_DIGIT: Regex = Regex::new(r"\D").unwrap();
}

/// Canonical CPF display form.
///
/// Strips every non-digit character; exactly 11 digits are punctuated as
/// `000.000.000-00`, anything else is returned stripped but unformatted so
/// the caller can re-check the length.
pub fn format_cpf(raw: &str) -> String {
    let digits = NON_DIGIT.replace_all(raw, "");

    if digits.len() != 11 {
        return digits.into_owned();
    }

    format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..]
    )
}

/// Canonical OAB display form.
///
/// Strips every non-digit character; exactly 6 digits become `000.000`,
/// anything else is returned stripped but unformatted.
pub fn format_oab(raw: &str) -> String {
    let digits = NON_DIGIT.replace_all(raw, "");

    if digits.len() != 6 {
        return digits.into_owned();
    }

    format!("{}.{}", &digits[..3], &digits[3..])
}
