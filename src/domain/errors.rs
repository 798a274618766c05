//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Fetching a document's raw bytes failed (filesystem, transport).
    #[error("Document source error: {0}")]
    Source(String),

    /// Document bytes are not valid UTF-8 text.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Document text is not syntactically valid JSON.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Declared file name fails the extension gate. Queue is left unchanged.
    #[error("Unsupported format: {0} (only .json is accepted)")]
    UnsupportedFormat(String),

    /// Aggregate was triggered with zero queued documents. Distinct from a
    /// per-document warning: there is no document to attach one to.
    #[error("No documents queued")]
    EmptyQueue,

    #[error("Input error: {0}")]
    Input(String),
}
