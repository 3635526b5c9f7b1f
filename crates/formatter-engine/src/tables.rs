//! Fixed normalization tables
//!
//! All tables are plain data injected into the [`Formatter`](crate::Formatter)
//! at construction time. `brazilian()` builds the production set.

use std::collections::HashMap;

/// One marital-status entry. `key` is matched as a substring of the
/// lowercased input; the table is scanned in declaration order and the
/// first hit wins, so entry order is part of the contract.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MaritalEntry {
    pub key: String,
    pub masculine: String,
    pub feminine: String,
}

impl MaritalEntry {
    fn new(key: &str, masculine: &str, feminine: &str) -> Self {
        Self {
            key: key.to_string(),
            masculine: masculine.to_string(),
            feminine: feminine.to_string(),
        }
    }
}

/// Immutable table set backing every normalization rule.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FormatTables {
    /// Street-type and unit-type abbreviations, keyed by lowercase token.
    pub abbreviations: HashMap<String, String>,
    /// Month names, January first.
    pub months: Vec<String>,
    /// Words kept lowercase inside city names unless in first position.
    pub connectors: Vec<String>,
    /// Marital-status entries, scanned in order.
    pub marital: Vec<MaritalEntry>,
    /// First-name endings treated as feminine.
    pub feminine_suffixes: Vec<String>,
    /// Recognized state codes mapped to state names.
    pub states: HashMap<String, String>,
}

impl FormatTables {
    /// Production tables for Brazilian-Portuguese contract text.
    pub fn brazilian() -> Self {
        let abbreviations = [
            ("avenida", "Av."),
            ("avendia", "Av."), // common typo, same abbreviation
            ("av", "Av."),
            ("rua", "R."),
            ("travessa", "Trav."),
            ("trav", "Trav."),
            ("alameda", "Al."),
            ("al", "Al."),
            ("praça", "Pça"),
            ("praca", "Pça"),
            ("rodovia", "Rod."),
            ("rod", "Rod."),
            ("estrada", "Est."),
            ("est", "Est."),
            ("número", "nº"),
            ("numero", "nº"),
            ("n°", "nº"),
            ("apartamento", "apto"),
            ("apto", "apto"),
            ("apartmento", "apto"), // common typo
            ("bloco", "bl."),
            ("bl", "bl."),
            ("sala", "sala"),
            ("andar", "andar"),
            ("conjunto", "cj."),
            ("cj", "cj."),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let months = [
            "janeiro",
            "fevereiro",
            "março",
            "abril",
            "maio",
            "junho",
            "julho",
            "agosto",
            "setembro",
            "outubro",
            "novembro",
            "dezembro",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let connectors = ["de", "da", "do", "das", "dos", "e"]
            .into_iter()
            .map(String::from)
            .collect();

        let marital = vec![
            MaritalEntry::new("solteiro", "solteiro", "solteira"),
            MaritalEntry::new("casado", "casado", "casada"),
            MaritalEntry::new("divorciado", "divorciado", "divorciada"),
            MaritalEntry::new("viúvo", "viúvo", "viúva"),
            MaritalEntry::new("viuvo", "viúvo", "viúva"), // unaccented input
            MaritalEntry::new("separado", "separado", "separada"),
        ];

        let feminine_suffixes = ["a", "e", "ia", "na", "ra", "la"]
            .into_iter()
            .map(String::from)
            .collect();

        let states = [
            ("AC", "Acre"),
            ("AL", "Alagoas"),
            ("AP", "Amapá"),
            ("AM", "Amazonas"),
            ("BA", "Bahia"),
            ("CE", "Ceará"),
            ("DF", "Distrito Federal"),
            ("ES", "Espírito Santo"),
            ("GO", "Goiás"),
            ("MA", "Maranhão"),
            ("MT", "Mato Grosso"),
            ("MS", "Mato Grosso do Sul"),
            ("MG", "Minas Gerais"),
            ("PA", "Pará"),
            ("PB", "Paraíba"),
            ("PR", "Paraná"),
            ("PE", "Pernambuco"),
            ("PI", "Piauí"),
            ("RJ", "Rio de Janeiro"),
            ("RN", "Rio Grande do Norte"),
            ("RS", "Rio Grande do Sul"),
            ("RO", "Rondônia"),
            ("RR", "Roraima"),
            ("SC", "Santa Catarina"),
            ("SP", "São Paulo"),
            ("SE", "Sergipe"),
            ("TO", "Tocantins"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            abbreviations,
            months,
            connectors,
            marital,
            feminine_suffixes,
            states,
        }
    }

    /// Whether `code` is a recognized two-letter state code (case-sensitive,
    /// expects uppercase).
    pub fn is_state_code(&self, code: &str) -> bool {
        self.states.contains_key(code)
    }

    /// Sorted list of recognized state codes, for prompt messages.
    pub fn state_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.states.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brazilian_tables_cover_all_states() {
        let tables = FormatTables::brazilian();
        assert_eq!(tables.states.len(), 27);
        assert_eq!(tables.states.get("RS").unwrap(), "Rio Grande do Sul");
    }

    #[test]
    fn test_marital_table_order_is_stable() {
        let tables = FormatTables::brazilian();
        assert_eq!(tables.marital[0].key, "solteiro");
        assert_eq!(tables.marital.last().unwrap().key, "separado");
    }

    #[test]
    fn test_state_codes_are_sorted() {
        let tables = FormatTables::brazilian();
        let codes = tables.state_codes();
        assert_eq!(codes.first(), Some(&"AC"));
        assert_eq!(codes.last(), Some(&"TO"));
    }

    #[test]
    fn test_months_start_with_january() {
        let tables = FormatTables::brazilian();
        assert_eq!(tables.months.len(), 12);
        assert_eq!(tables.months[0], "janeiro");
        assert_eq!(tables.months[11], "dezembro");
    }
}
