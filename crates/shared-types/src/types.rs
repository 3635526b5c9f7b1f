/// Grammatical gender used to select Portuguese word forms in contract text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    /// Select the word form agreeing with this gender.
    pub fn pick<'a>(&self, masculine: &'a str, feminine: &'a str) -> &'a str {
        match self {
            Gender::Masculine => masculine,
            Gender::Feminine => feminine,
        }
    }
}

/// Normalized data for the person the contracts are issued for.
///
/// Every field has already been through the formatter; the record is
/// read-only once built.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PersonRecord {
    pub full_name: String,   // uppercase, single-spaced
    pub national_id: String, // CPF, 000.000.000-00
    pub street_address: String,
    pub city: String,
    pub state_code: String, // two-letter UF
    pub bar_number: String, // OAB, 000.000
    pub bar_state_code: String,
    pub marital_status: String, // lowercase, gender-agreed
    pub nationality: String,
    pub profession: String,
    pub signing_date: String, // "23 de dezembro de 2025"
    pub gender: Gender,
}

/// One of the firm's authorized signatories. Their names appear literally
/// in the contract templates and must always render bold.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Signatory {
    pub name: String,
    pub national_id: String,
    pub bar_number_rs: String,
    pub bar_number_sp: String,
}

/// Fixed organizational data injected into placeholder and emphasis
/// construction. `Default` carries the production firm data; tests build
/// alternates.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FirmConfig {
    pub name: String,
    pub cnpj: String,
    pub headquarters: String, // full address line
    pub headquarters_city: String,
    pub headquarters_state: String, // two-letter UF
    pub signatories: Vec<Signatory>,
    pub bold_phrases: Vec<String>, // section headers and fixed boilerplate
}

impl Default for FirmConfig {
    fn default() -> Self {
        Self {
            name: "SILVEIRO ADVOGADOS".to_string(),
            cnpj: "00.727.418/0001-03".to_string(),
            headquarters: "Av. Carlos Gomes, 258 - 9º andar, Porto Alegre/RS".to_string(),
            headquarters_city: "Porto Alegre".to_string(),
            headquarters_state: "RS".to_string(),
            signatories: vec![
                Signatory {
                    name: "RAFAEL BRAUDE CANTERJI".to_string(),
                    national_id: "806.718.290-68".to_string(),
                    bar_number_rs: "56.110".to_string(),
                    bar_number_sp: "456.241".to_string(),
                },
                Signatory {
                    name: "RICARDO LEAL DE MORAES".to_string(),
                    national_id: "962.155.770-49".to_string(),
                    bar_number_rs: "56.486".to_string(),
                    bar_number_sp: "325.160".to_string(),
                },
            ],
            bold_phrases: vec![
                "OUTORGANTE:".to_string(),
                "PROCURAÇÃO".to_string(),
                "OUTORGADOS:".to_string(),
                "SOCIEDADE:".to_string(),
                "VALIDADE:".to_string(),
                "TERMO DE AUTORIZAÇÃO E LIBERAÇÃO DE USO DE IMAGEM E VOZ".to_string(),
                "TERMO DE CONFIDENCIALIDADE".to_string(),
                "FINS E PODERES:".to_string(),
                "TERMO DE PROTEÇÃO DE DADOS".to_string(),
            ],
        }
    }
}

/// One contiguous fragment of rendered paragraph text.
///
/// Concatenating a paragraph's spans in order reproduces the full text
/// exactly; `bold` marks fragments the document writer must emphasize.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmphasisSpan {
    pub text: String,
    pub bold: bool,
}

impl EmphasisSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gender_pick() {
        assert_eq!(Gender::Masculine.pick("advogado", "advogada"), "advogado");
        assert_eq!(Gender::Feminine.pick("advogado", "advogada"), "advogada");
    }

    #[test]
    fn test_default_firm_has_two_signatories() {
        let firm = FirmConfig::default();
        assert_eq!(firm.signatories.len(), 2);
        assert!(firm.bold_phrases.iter().any(|p| p == "PROCURAÇÃO"));
    }

    #[test]
    fn test_span_constructors() {
        assert!(EmphasisSpan::bold("PROCURAÇÃO").bold);
        assert!(!EmphasisSpan::plain("texto").bold);
    }
}
