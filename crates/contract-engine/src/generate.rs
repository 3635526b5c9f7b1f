//! Per-contract generation pipeline

use crate::errors::EngineError;
use crate::output::output_file_stem;
use crate::renderer::{DocumentRenderer, RenderedDocument};
use crate::templates::{self, ContractInfo, ContractTemplate};
use chrono::Local;
use shared_types::{FirmConfig, PersonRecord};
use tracing::{debug, info};

/// One finished contract, ready for a sink.
pub struct GeneratedDocument {
    pub info: ContractInfo,
    pub file_stem: String,
    pub document: RenderedDocument,
}

/// Renders registered contracts for one person record.
pub struct ContractGenerator {
    firm: FirmConfig,
}

impl ContractGenerator {
    pub fn new(firm: FirmConfig) -> Self {
        Self { firm }
    }

    pub fn generate(
        &self,
        contract: &str,
        record: &PersonRecord,
    ) -> Result<GeneratedDocument, EngineError> {
        let info = templates::find_contract(contract)
            .ok_or_else(|| EngineError::TemplateNotFound(contract.to_string()))?;
        let source = templates::get_template_source(contract)?;
        let template = ContractTemplate::parse(&source);
        debug!(
            "processing {} ({} paragraphs)",
            info.template_file,
            template.paragraphs.len()
        );

        let renderer = DocumentRenderer::new(record, &self.firm);
        let document = renderer.render_document(&template);
        let file_stem = output_file_stem(&info.template_file, &record.full_name, Local::now());
        info!("rendered '{}' as {}", info.title, file_stem);

        Ok(GeneratedDocument {
            info,
            file_stem,
            document,
        })
    }

    /// Generate every registered contract in order, collecting
    /// per-contract results without stopping at the first failure.
    pub fn generate_all(
        &self,
        record: &PersonRecord,
    ) -> Vec<(ContractInfo, Result<GeneratedDocument, EngineError>)> {
        templates::list_contracts()
            .into_iter()
            .map(|info| {
                let result = self.generate(&info.name, record);
                (info, result)
            })
            .collect()
    }
}
