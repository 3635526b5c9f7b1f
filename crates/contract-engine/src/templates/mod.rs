//! Contract template management and embedded templates

pub mod embedded;
pub mod registry;

pub use registry::{find_contract, get_template_source, list_contracts, ContractInfo};

/// A parsed contract template: one paragraph per line, empty lines kept as
/// blank structural paragraphs.
#[derive(Debug, Clone)]
pub struct ContractTemplate {
    pub paragraphs: Vec<String>,
}

impl ContractTemplate {
    pub fn parse(source: &str) -> Self {
        let paragraphs = source
            .lines()
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();
        Self { paragraphs }
    }
}
