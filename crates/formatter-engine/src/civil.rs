//! Marital-status normalization

use crate::tables::FormatTables;
use shared_types::Gender;

/// Map free-form marital-status input to the gender-agreed lowercase form.
///
/// The input is lowercased and trimmed, then checked against the status
/// table in declaration order; the first entry whose key is a substring of
/// the input wins. Substring matching (not equality) tolerates decorated
/// input such as "estado civil: casado". No match returns the lowercased
/// input unchanged.
pub fn format_marital_status(tables: &FormatTables, raw: &str, gender: Gender) -> String {
    let lowered = raw.trim().to_lowercase();

    if lowered.is_empty() {
        return lowered;
    }

    for entry in &tables.marital {
        if lowered.contains(entry.key.as_str()) {
            return gender.pick(&entry.masculine, &entry.feminine).to_string();
        }
    }

    lowered
}
