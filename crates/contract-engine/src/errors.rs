//! Engine error types

use thiserror::Error;

/// Failures during contract generation. Template lookup is distinct from
/// I/O so callers can report an unknown contract separately from a failed
/// write.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Contract template not found: {0}")]
    TemplateNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
