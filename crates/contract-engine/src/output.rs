//! Output naming and document sinks

use crate::errors::EngineError;
use crate::renderer::RenderedDocument;
use chrono::{DateTime, Local};
use shared_types::EmphasisSpan;

/// Font the document writer applies to every run.
pub const FONT_FAMILY: &str = "Arial Narrow";
pub const FONT_SIZE_PT: u32 = 11;

/// Output file stem: template base name with spaces underscored and the
/// `_MODEL` marker dropped, the person's name with spaces underscored,
/// and a second-resolution timestamp.
pub fn output_file_stem(
    template_file: &str,
    person_name: &str,
    timestamp: DateTime<Local>,
) -> String {
    let base = template_file.replace(' ', "_").replace("_MODEL", "");
    let person = person_name.replace(' ', "_");
    format!("{}_{}_{}", base, person, timestamp.format("%Y%m%d_%H%M%S"))
}

/// Serializes a rendered document to bytes. The word-processor writer
/// itself lives outside this crate; these sinks feed it (JSON) or give
/// the operator a readable preview (Markdown).
pub trait DocumentSink {
    fn extension(&self) -> &'static str;
    fn render(&self, document: &RenderedDocument) -> Result<Vec<u8>, EngineError>;
}

/// Machine-readable span structure for the downstream document writer,
/// including the fixed run font.
pub struct JsonSink;

#[derive(serde::Serialize)]
struct JsonDocument<'a> {
    font_family: &'static str,
    font_size_pt: u32,
    paragraphs: &'a [Vec<EmphasisSpan>],
}

impl DocumentSink for JsonSink {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, document: &RenderedDocument) -> Result<Vec<u8>, EngineError> {
        let payload = JsonDocument {
            font_family: FONT_FAMILY,
            font_size_pt: FONT_SIZE_PT,
            paragraphs: &document.paragraphs,
        };
        Ok(serde_json::to_vec_pretty(&payload)?)
    }
}

/// Markdown preview: bold spans wrapped in `**`, blank paragraphs kept as
/// empty lines.
pub struct MarkdownSink;

impl DocumentSink for MarkdownSink {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, document: &RenderedDocument) -> Result<Vec<u8>, EngineError> {
        let mut lines = Vec::with_capacity(document.paragraphs.len());

        for paragraph in &document.paragraphs {
            let mut line = String::new();
            for span in paragraph {
                if span.bold {
                    line.push_str("**");
                    line.push_str(&span.text);
                    line.push_str("**");
                } else {
                    line.push_str(&span.text);
                }
            }
            lines.push(line);
        }

        let mut text = lines.join("\n");
        text.push('\n');
        Ok(text.into_bytes())
    }
}
