//! Placeholder substitution

use shared_types::{FirmConfig, PersonRecord};

/// Mapping from literal template tokens to replacement strings, built
/// fresh per document from the person record and the firm data.
///
/// Tokens are disjoint and never overlap, so substitution order does not
/// affect the result.
#[derive(Debug, Clone)]
pub struct PlaceholderMap {
    entries: Vec<(&'static str, String)>,
}

impl PlaceholderMap {
    pub fn build(record: &PersonRecord, firm: &FirmConfig) -> Self {
        let entries = vec![
            ("{{NOME_COMPLETO}}", record.full_name.clone()),
            ("{{CPF}}", record.national_id.clone()),
            ("{{CPF_OUTORGANTE}}", record.national_id.clone()),
            ("{{ENDERECO_COMPLETO}}", record.street_address.clone()),
            (
                "{{CIDADE_ESTADO}}",
                format!("{}/{}", record.city, record.state_code),
            ),
            ("{{ENDERECO_CIDADE}}", record.city.clone()),
            ("{{ENDERECO_ESTADO}}", record.state_code.clone()),
            ("{{OAB_NUMERO}}", record.bar_number.clone()),
            ("{{OAB_UF}}", record.bar_state_code.clone()),
            ("{{ESTADO_CIVIL}}", record.marital_status.clone()),
            ("{{BRASILEIRO_A}}", record.nationality.clone()),
            (
                "{{RESIDENTE_A}}",
                record
                    .gender
                    .pick("residente e domiciliado", "residente e domiciliada")
                    .to_string(),
            ),
            ("{{ADVOGADO_A}}", record.profession.clone()),
            ("{{SOCIEDADE_NOME}}", firm.name.clone()),
            ("{{SOCIEDADE_CNPJ}}", firm.cnpj.clone()),
            ("{{DATA_ASSINATURA}}", signature_date(record, firm)),
            ("{{NOME_ASSINATURA}}", record.full_name.clone()),
            ("{{SEDE}}", firm.headquarters_city.clone()),
        ];
        Self { entries }
    }

    /// Replace every occurrence of every token. Tokens absent from the
    /// text are no-ops.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (token, value) in &self.entries {
            if out.contains(token) {
                out = out.replace(token, value);
            }
        }
        out
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(token, _)| *token)
    }
}

/// Signature-line date: "<HQ city>/<HQ state>, <formatted date>", unless
/// the formatted date already carries the headquarters city and state.
fn signature_date(record: &PersonRecord, firm: &FirmConfig) -> String {
    let date = &record.signing_date;
    if date.contains(&firm.headquarters_city) && date.contains(&firm.headquarters_state) {
        date.clone()
    } else {
        format!(
            "{}/{}, {}",
            firm.headquarters_city, firm.headquarters_state, date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Gender;

    fn sample_record() -> PersonRecord {
        PersonRecord {
            full_name: "JOÃO DA SILVA".to_string(),
            national_id: "123.456.789-09".to_string(),
            street_address: "Av. Paulista, 123, apto 101".to_string(),
            city: "São Paulo".to_string(),
            state_code: "SP".to_string(),
            bar_number: "123.456".to_string(),
            bar_state_code: "SP".to_string(),
            marital_status: "casado".to_string(),
            nationality: "brasileiro".to_string(),
            profession: "advogado".to_string(),
            signing_date: "23 de dezembro de 2025".to_string(),
            gender: Gender::Masculine,
        }
    }

    #[test]
    fn test_city_state_pair() {
        let map = PlaceholderMap::build(&sample_record(), &FirmConfig::default());
        assert_eq!(
            map.apply("domiciliado em {{CIDADE_ESTADO}}"),
            "domiciliado em São Paulo/SP"
        );
    }

    #[test]
    fn test_signature_date_gains_headquarters_prefix() {
        let map = PlaceholderMap::build(&sample_record(), &FirmConfig::default());
        assert_eq!(
            map.apply("{{DATA_ASSINATURA}}"),
            "Porto Alegre/RS, 23 de dezembro de 2025"
        );
    }

    #[test]
    fn test_signature_date_already_carrying_headquarters_is_kept() {
        let mut record = sample_record();
        record.signing_date = "Porto Alegre/RS, 23 de dezembro de 2025".to_string();
        let map = PlaceholderMap::build(&record, &FirmConfig::default());
        assert_eq!(
            map.apply("{{DATA_ASSINATURA}}"),
            "Porto Alegre/RS, 23 de dezembro de 2025"
        );
    }

    #[test]
    fn test_gendered_residence_phrase() {
        let mut record = sample_record();
        record.gender = Gender::Feminine;
        record.nationality = "brasileira".to_string();
        record.profession = "advogada".to_string();
        let map = PlaceholderMap::build(&record, &FirmConfig::default());
        assert_eq!(
            map.apply("{{BRASILEIRO_A}}, {{ADVOGADO_A}}, {{RESIDENTE_A}}"),
            "brasileira, advogada, residente e domiciliada"
        );
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        let map = PlaceholderMap::build(&sample_record(), &FirmConfig::default());
        assert_eq!(
            map.apply("{{CPF}} e {{CPF}}"),
            "123.456.789-09 e 123.456.789-09"
        );
    }

    #[test]
    fn test_absent_tokens_are_noops() {
        let map = PlaceholderMap::build(&sample_record(), &FirmConfig::default());
        assert_eq!(map.apply("texto sem marcadores"), "texto sem marcadores");
    }

    #[test]
    fn test_headquarters_city_token() {
        let map = PlaceholderMap::build(&sample_record(), &FirmConfig::default());
        assert_eq!(map.apply("em {{SEDE}}"), "em Porto Alegre");
    }
}
