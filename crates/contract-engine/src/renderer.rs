//! Paragraph rendering: substitution followed by the emphasis partition

use crate::emphasis::EmphasisSet;
use crate::placeholders::PlaceholderMap;
use crate::templates::ContractTemplate;
use shared_types::{EmphasisSpan, FirmConfig, PersonRecord};

/// A fully rendered document: one span list per template paragraph, in
/// order. Blank structural paragraphs keep an empty span list.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RenderedDocument {
    pub paragraphs: Vec<Vec<EmphasisSpan>>,
}

/// Per-document renderer. The placeholder map and emphasis set are built
/// once and shared by every paragraph; paragraphs do not interact.
pub struct DocumentRenderer {
    placeholders: PlaceholderMap,
    emphasis: EmphasisSet,
}

impl DocumentRenderer {
    pub fn new(record: &PersonRecord, firm: &FirmConfig) -> Self {
        Self {
            placeholders: PlaceholderMap::build(record, firm),
            emphasis: EmphasisSet::for_document(firm, &record.full_name),
        }
    }

    /// Render one paragraph: substitute every placeholder, then partition
    /// the result into bold/plain spans.
    ///
    /// Blank or whitespace-only paragraphs yield no spans at all, so
    /// structural spacing in the template passes through untouched.
    pub fn render_paragraph(&self, text: &str) -> Vec<EmphasisSpan> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let substituted = self.placeholders.apply(text);
        self.emphasis.partition(&substituted)
    }

    pub fn render_document(&self, template: &ContractTemplate) -> RenderedDocument {
        RenderedDocument {
            paragraphs: template
                .paragraphs
                .iter()
                .map(|paragraph| self.render_paragraph(paragraph))
                .collect(),
        }
    }
}
