//! Domain entities. Pure data structures for the core business.
//!
//! No Telegram/IO types here — these are mapped from adapters.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Opaque participant identifier from a chat export. Exports carry `from_id`
/// either as a bare number or as a string token (e.g. "user12345"); the two
/// forms are distinct keys and are never conflated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum UserId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Numeric(n) => write!(f, "{}", n),
            UserId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        UserId::Numeric(n)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId::Text(s.to_string())
    }
}

/// Participant directory plus mention set extracted from one or more export
/// documents. Produced per document by the analyzer and folded across a batch
/// by the report service; both levels share this shape.
///
/// Ordered collections so display iteration is deterministic per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatSummary {
    /// Participant id -> display name. Last write wins on collision.
    pub users: BTreeMap<UserId, String>,
    /// Mentioned usernames, stored without the `@` prefix. Never empty strings.
    pub mentions: BTreeSet<String>,
}

impl ChatSummary {
    /// Fold another summary into this one: later user entries overwrite
    /// earlier ones for the same id, mentions are unioned.
    pub fn merge(&mut self, other: ChatSummary) {
        self.users.extend(other.users);
        self.mentions.extend(other.mentions);
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.mentions.is_empty()
    }
}

/// A queued upload awaiting processing. `opaque_ref` is resolved by the
/// document source adapter (e.g. a filesystem path or a file handle id);
/// `name` is the declared filename, used for the extension gate and for
/// labeling warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDocument {
    pub name: String,
    pub opaque_ref: String,
}

impl PendingDocument {
    pub fn new(name: impl Into<String>, opaque_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opaque_ref: opaque_ref.into(),
        }
    }
}

/// Non-fatal failure for one document in a batch. The rest of the batch is
/// unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentWarning {
    /// 1-based position of the document in the drained queue.
    pub position: usize,
    pub name: String,
    pub reason: String,
}

impl fmt::Display for DocumentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file {} ({}): {}", self.position, self.name, self.reason)
    }
}
