//! Per-conversation session queue. Holds pending documents between uploads
//! and the aggregate trigger.
//!
//! The delivery channel owns one Session per conversational context and
//! passes it into use cases by reference; there is no process-wide state.
//! Single-threaded-per-session delivery is assumed — if that guarantee does
//! not hold, wrap the Session in an external mutex keyed by session.

use crate::domain::{DomainError, PendingDocument};

/// The only accepted upload suffix, matched case-insensitively.
pub const SUPPORTED_EXTENSION: &str = ".json";

/// Returns true when the declared filename carries the supported extension.
/// Used as the upload-time gate before a document enters the queue.
pub fn is_supported_name(name: &str) -> bool {
    name.to_lowercase().ends_with(SUPPORTED_EXTENSION)
}

/// Ordered queue of pending documents for one conversational context.
#[derive(Debug, Default)]
pub struct Session {
    queue: Vec<PendingDocument>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the queue. Idempotent.
    pub fn reset(&mut self) {
        self.queue.clear();
    }

    /// Appends a document to the end of the queue. Rejects names that fail
    /// the extension gate without mutating the queue. Returns the new queue
    /// length so the caller can echo a running count.
    pub fn append(&mut self, doc: PendingDocument) -> Result<usize, DomainError> {
        if !is_supported_name(&doc.name) {
            return Err(DomainError::UnsupportedFormat(doc.name));
        }
        self.queue.push(doc);
        Ok(self.queue.len())
    }

    /// Takes the current queue contents (in append order) and leaves the
    /// queue empty in the same step.
    pub fn drain(&mut self) -> Vec<PendingDocument> {
        std::mem::take(&mut self.queue)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Declared names of queued documents, in order. For queue display.
    pub fn pending_names(&self) -> Vec<&str> {
        self.queue.iter().map(|d| d.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> PendingDocument {
        PendingDocument::new(name, format!("ref:{}", name))
    }

    #[test]
    fn test_extension_gate() {
        assert!(is_supported_name("chat.json"));
        assert!(is_supported_name("CHAT.JSON"));
        assert!(is_supported_name("result (1).Json"));
        assert!(!is_supported_name("chat.txt"));
        assert!(!is_supported_name("chat"));
        assert!(!is_supported_name("chat.json.zip"));
    }

    #[test]
    fn test_append_rejects_unsupported_without_mutation() {
        let mut session = Session::new();
        session.append(doc("a.json")).unwrap();

        let err = session.append(doc("notes.txt")).unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedFormat(_)));
        assert_eq!(session.len(), 1);
        assert_eq!(session.pending_names(), vec!["a.json"]);
    }

    #[test]
    fn test_append_returns_running_count() {
        let mut session = Session::new();
        assert_eq!(session.append(doc("a.json")).unwrap(), 1);
        assert_eq!(session.append(doc("b.json")).unwrap(), 2);
        assert_eq!(session.append(doc("c.json")).unwrap(), 3);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut session = Session::new();
        session.append(doc("a.json")).unwrap();
        session.reset();
        session.reset();
        assert!(session.is_empty());

        // Appending after reset behaves as if the session were new.
        assert_eq!(session.append(doc("b.json")).unwrap(), 1);
        assert_eq!(session.pending_names(), vec!["b.json"]);
    }

    #[test]
    fn test_drain_returns_in_order_and_empties() {
        let mut session = Session::new();
        session.append(doc("a.json")).unwrap();
        session.append(doc("b.json")).unwrap();

        let drained = session.drain();
        assert_eq!(drained, vec![doc("a.json"), doc("b.json")]);
        assert!(session.is_empty());

        // A second drain yields nothing.
        assert!(session.drain().is_empty());
    }
}
