//! Template registry and metadata

use super::embedded;
use crate::errors::EngineError;
use serde::{Deserialize, Serialize};

/// Information about an available contract template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractInfo {
    /// Template name (used to resolve the embedded source)
    pub name: String,
    /// Human-readable title
    pub title: String,
    /// Human-readable description
    pub description: String,
    /// Base name of the source document, used for output naming
    pub template_file: String,
    /// Placeholder tokens the template consumes
    pub required_inputs: Vec<String>,
}

/// List all available contract templates, in generation order
pub fn list_contracts() -> Vec<ContractInfo> {
    vec![
        ContractInfo {
            name: "procuracao".to_string(),
            title: "Procuração".to_string(),
            description: "Procuração ad judicia em favor dos outorgados da sociedade".to_string(),
            template_file: "PROCURACAO_MODEL".to_string(),
            required_inputs: vec![
                "{{NOME_COMPLETO}}".to_string(),
                "{{BRASILEIRO_A}}".to_string(),
                "{{ESTADO_CIVIL}}".to_string(),
                "{{ADVOGADO_A}}".to_string(),
                "{{CPF}}".to_string(),
                "{{CPF_OUTORGANTE}}".to_string(),
                "{{OAB_UF}}".to_string(),
                "{{OAB_NUMERO}}".to_string(),
                "{{RESIDENTE_A}}".to_string(),
                "{{ENDERECO_COMPLETO}}".to_string(),
                "{{ENDERECO_CIDADE}}".to_string(),
                "{{ENDERECO_ESTADO}}".to_string(),
                "{{SEDE}}".to_string(),
                "{{SOCIEDADE_NOME}}".to_string(),
                "{{SOCIEDADE_CNPJ}}".to_string(),
                "{{DATA_ASSINATURA}}".to_string(),
                "{{NOME_ASSINATURA}}".to_string(),
            ],
        },
        ContractInfo {
            name: "autorizacao_imagem".to_string(),
            title: "Autorização de Imagem".to_string(),
            description: "Termo de autorização e liberação de uso de imagem e voz".to_string(),
            template_file: "TERMO DE AUTORIZAÇÃO DE IMAGEM_MODEL".to_string(),
            required_inputs: vec![
                "{{NOME_COMPLETO}}".to_string(),
                "{{BRASILEIRO_A}}".to_string(),
                "{{ESTADO_CIVIL}}".to_string(),
                "{{ADVOGADO_A}}".to_string(),
                "{{CPF}}".to_string(),
                "{{RESIDENTE_A}}".to_string(),
                "{{ENDERECO_COMPLETO}}".to_string(),
                "{{CIDADE_ESTADO}}".to_string(),
                "{{SOCIEDADE_NOME}}".to_string(),
                "{{SOCIEDADE_CNPJ}}".to_string(),
                "{{DATA_ASSINATURA}}".to_string(),
                "{{NOME_ASSINATURA}}".to_string(),
            ],
        },
        ContractInfo {
            name: "confidencialidade".to_string(),
            title: "Confidencialidade".to_string(),
            description: "Termo de confidencialidade sobre informações da sociedade".to_string(),
            template_file: "TERMO DE CONFIDENCIALIDADE_MODEL".to_string(),
            required_inputs: vec![
                "{{NOME_COMPLETO}}".to_string(),
                "{{BRASILEIRO_A}}".to_string(),
                "{{ESTADO_CIVIL}}".to_string(),
                "{{ADVOGADO_A}}".to_string(),
                "{{CPF}}".to_string(),
                "{{OAB_UF}}".to_string(),
                "{{OAB_NUMERO}}".to_string(),
                "{{RESIDENTE_A}}".to_string(),
                "{{ENDERECO_COMPLETO}}".to_string(),
                "{{CIDADE_ESTADO}}".to_string(),
                "{{SOCIEDADE_NOME}}".to_string(),
                "{{SOCIEDADE_CNPJ}}".to_string(),
                "{{DATA_ASSINATURA}}".to_string(),
                "{{NOME_ASSINATURA}}".to_string(),
            ],
        },
        ContractInfo {
            name: "protecao_dados".to_string(),
            title: "Proteção de Dados".to_string(),
            description: "Termo de proteção de dados pessoais (LGPD)".to_string(),
            template_file: "TERMO DE PROTEÇÃO DE DADOS_MODEL".to_string(),
            required_inputs: vec![
                "{{NOME_COMPLETO}}".to_string(),
                "{{BRASILEIRO_A}}".to_string(),
                "{{ESTADO_CIVIL}}".to_string(),
                "{{ADVOGADO_A}}".to_string(),
                "{{CPF}}".to_string(),
                "{{RESIDENTE_A}}".to_string(),
                "{{ENDERECO_COMPLETO}}".to_string(),
                "{{CIDADE_ESTADO}}".to_string(),
                "{{SOCIEDADE_NOME}}".to_string(),
                "{{SOCIEDADE_CNPJ}}".to_string(),
                "{{DATA_ASSINATURA}}".to_string(),
                "{{NOME_ASSINATURA}}".to_string(),
            ],
        },
    ]
}

/// Find a contract's metadata by name
pub fn find_contract(name: &str) -> Option<ContractInfo> {
    list_contracts().into_iter().find(|c| c.name == name)
}

/// Get the source text for a contract template by name
pub fn get_template_source(name: &str) -> Result<String, EngineError> {
    embedded::get_embedded_template(name)
        .ok_or_else(|| EngineError::TemplateNotFound(name.to_string()))
}
