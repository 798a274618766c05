//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, PendingDocument};

/// Document source. Resolves queued uploads to their raw bytes.
///
/// Byte content is fetched before analysis begins; no blocking I/O happens
/// inside the analyzer itself.
#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    /// Enumerate documents currently offered by the source (e.g. files in
    /// an export directory). Names are declared filenames; refs are opaque
    /// to the application and resolved only by `fetch_bytes`.
    async fn list_available(&self) -> Result<Vec<PendingDocument>, DomainError>;

    /// Fetch one document's raw content. A failure here is per-document:
    /// the caller skips the document and continues with the rest.
    async fn fetch_bytes(&self, doc: &PendingDocument) -> Result<Vec<u8>, DomainError>;
}
