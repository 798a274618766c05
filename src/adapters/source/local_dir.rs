//! Implements DocumentSource over a local directory of export files.
//!
//! Lists entries whose names pass the extension gate; the opaque ref is the
//! absolute-ish path string, resolved back by fetch_bytes.

use crate::domain::{session, DomainError, PendingDocument};
use crate::ports::DocumentSource;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Filesystem-backed document source rooted at one directory.
pub struct LocalDirSource {
    root: PathBuf,
}

impl LocalDirSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl DocumentSource for LocalDirSource {
    async fn list_available(&self) -> Result<Vec<PendingDocument>, DomainError> {
        let mut entries = fs::read_dir(&self.root)
            .await
            .map_err(|e| DomainError::Source(format!("read dir {}: {}", self.root.display(), e)))?;

        let mut docs = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DomainError::Source(format!("read dir entry: {}", e)))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !session::is_supported_name(&name) {
                continue;
            }
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            docs.push(PendingDocument::new(
                name,
                entry.path().to_string_lossy().into_owned(),
            ));
        }

        // Stable listing order for prompts and tests.
        docs.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(root = %self.root.display(), count = docs.len(), "listed export files");
        Ok(docs)
    }

    async fn fetch_bytes(&self, doc: &PendingDocument) -> Result<Vec<u8>, DomainError> {
        fs::read(&doc.opaque_ref)
            .await
            .map_err(|e| DomainError::Source(format!("read {}: {}", doc.name, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unique scratch directory under the system temp dir.
    async fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tg-mentions-test-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir).await;
        fs::create_dir_all(&dir).await.unwrap();
        dir
    }

    #[tokio::test]
    async fn test_list_filters_and_sorts() {
        let dir = scratch_dir("list").await;
        fs::write(dir.join("b.json"), b"{}").await.unwrap();
        fs::write(dir.join("A.JSON"), b"{}").await.unwrap();
        fs::write(dir.join("notes.txt"), b"nope").await.unwrap();
        fs::create_dir(dir.join("sub.json")).await.unwrap();

        let source = LocalDirSource::new(&dir);
        let docs = source.list_available().await.unwrap();

        let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["A.JSON", "b.json"]);

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_fetch_returns_raw_bytes() {
        let dir = scratch_dir("fetch").await;
        fs::write(dir.join("chat.json"), br#"{"messages":[]}"#)
            .await
            .unwrap();

        let source = LocalDirSource::new(&dir);
        let docs = source.list_available().await.unwrap();
        let bytes = source.fetch_bytes(&docs[0]).await.unwrap();
        assert_eq!(bytes, br#"{"messages":[]}"#);

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_source_error() {
        let source = LocalDirSource::new(std::env::temp_dir());
        let doc = PendingDocument::new("gone.json", "/definitely/not/here/gone.json");
        let err = source.fetch_bytes(&doc).await.unwrap_err();
        assert!(matches!(err, DomainError::Source(_)));
    }
}
