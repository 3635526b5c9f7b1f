//! City and state-code normalization

use crate::capitalize_word;
use crate::tables::FormatTables;

/// Title-case each token of a city name, keeping connector words (de, da,
/// do, das, dos, e) lowercase unless they open the name.
pub fn format_city(tables: &FormatTables, raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    collapsed
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            let lowered = token.to_lowercase();
            if i > 0 && tables.connectors.iter().any(|c| *c == lowered) {
                lowered
            } else {
                capitalize_word(token)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trim and uppercase a state code. Unrecognized codes pass through;
/// rejecting them is the caller's decision.
pub fn format_state_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}
