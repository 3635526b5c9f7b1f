//! Contract document rendering engine
//!
//! Turns a normalized person record plus the firm's fixed data into
//! finished contract documents:
//! - Placeholder substitution over the embedded templates
//! - Selective bold emphasis (longest-match partition over a fixed
//!   phrase set plus the subject's name)
//! - Output naming and serialization sinks for the document writer

pub mod emphasis;
pub mod errors;
pub mod generate;
pub mod output;
pub mod placeholders;
pub mod renderer;
pub mod templates;

pub use emphasis::EmphasisSet;
pub use errors::EngineError;
pub use generate::{ContractGenerator, GeneratedDocument};
pub use output::{output_file_stem, DocumentSink, JsonSink, MarkdownSink};
pub use placeholders::PlaceholderMap;
pub use renderer::{DocumentRenderer, RenderedDocument};
pub use templates::{
    find_contract, get_template_source, list_contracts, ContractInfo, ContractTemplate,
};
