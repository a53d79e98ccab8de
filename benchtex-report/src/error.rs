//! Report Errors

use thiserror::Error;

/// Errors that abort report generation
#[derive(Debug, Error)]
pub enum TexError {
    /// Writing to the output sink failed; output written so far is incomplete
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the JSON report failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
