//! Embedded template loader
//!
//! Loads the contract templates from external files at compile time,
//! embedding them directly in the binary.

/// Power of attorney - loaded from templates/procuracao.txt
const PROCURACAO_TEMPLATE: &str = include_str!("../../templates/procuracao.txt");

/// Image and voice use authorization - loaded from templates/autorizacao_imagem.txt
const AUTORIZACAO_IMAGEM_TEMPLATE: &str = include_str!("../../templates/autorizacao_imagem.txt");

/// Confidentiality term - loaded from templates/confidencialidade.txt
const CONFIDENCIALIDADE_TEMPLATE: &str = include_str!("../../templates/confidencialidade.txt");

/// Data protection term - loaded from templates/protecao_dados.txt
const PROTECAO_DADOS_TEMPLATE: &str = include_str!("../../templates/protecao_dados.txt");

/// Get an embedded template by name
pub fn get_embedded_template(name: &str) -> Option<String> {
    match name {
        "procuracao" => Some(PROCURACAO_TEMPLATE.to_string()),
        "autorizacao_imagem" => Some(AUTORIZACAO_IMAGEM_TEMPLATE.to_string()),
        "confidencialidade" => Some(CONFIDENCIALIDADE_TEMPLATE.to_string()),
        "protecao_dados" => Some(PROTECAO_DADOS_TEMPLATE.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_are_embedded() {
        for name in [
            "procuracao",
            "autorizacao_imagem",
            "confidencialidade",
            "protecao_dados",
        ] {
            let source = get_embedded_template(name);
            assert!(source.is_some(), "template '{}' should be embedded", name);
            assert!(!source.unwrap().is_empty());
        }
    }

    #[test]
    fn test_unknown_template_is_none() {
        assert!(get_embedded_template("contrato_social").is_none());
    }
}
