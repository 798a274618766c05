//! Batch aggregation: drain the session queue, analyze every document,
//! fold the partial summaries into one report.
//!
//! Per-document failures (fetch, decode, parse) are local: the document is
//! skipped with a warning and the rest of the batch still contributes.
//! Only a completely empty queue is a batch-level condition.

use crate::domain::{ChatSummary, DocumentWarning, DomainError, Session};
use crate::ports::DocumentSource;
use crate::usecases::analyze_document;
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of one aggregate cycle: the folded summary plus one warning per
/// document that could not be processed.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub summary: ChatSummary,
    pub warnings: Vec<DocumentWarning>,
}

/// Report service. Coordinates drain, per-document fetch + analysis, and the
/// left-to-right fold of partial summaries.
pub struct ReportService {
    source: Arc<dyn DocumentSource>,
}

impl ReportService {
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self { source }
    }

    /// Run one aggregate cycle over the session's queue.
    ///
    /// The queue is drained up front, so the session ends up empty whatever
    /// the outcome — a user is never stuck with a poisoned queue. Documents
    /// are folded in queue order: later entries overwrite earlier directory
    /// names for the same id, mentions are unioned.
    ///
    /// Returns `DomainError::EmptyQueue` when nothing was queued.
    pub async fn aggregate(&self, session: &mut Session) -> Result<BatchReport, DomainError> {
        let docs = session.drain();
        if docs.is_empty() {
            return Err(DomainError::EmptyQueue);
        }

        let mut report = BatchReport::default();

        for (idx, doc) in docs.iter().enumerate() {
            let position = idx + 1;
            let bytes = match self.source.fetch_bytes(doc).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(position, name = %doc.name, error = %e, "fetch failed, skipping document");
                    report.warnings.push(DocumentWarning {
                        position,
                        name: doc.name.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            match analyze_document(&bytes) {
                Ok(partial) => report.summary.merge(partial),
                Err(e) => {
                    warn!(position, name = %doc.name, error = %e, "analysis failed, skipping document");
                    report.warnings.push(DocumentWarning {
                        position,
                        name: doc.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            documents = docs.len(),
            users = report.summary.users.len(),
            mentions = report.summary.mentions.len(),
            warnings = report.warnings.len(),
            "aggregation complete"
        );

        Ok(report)
    }
}

/// Render a batch report for display: enumerated participants as
/// `name (id)`, enumerated `@mention` lines, each list with a placeholder
/// when empty, warnings appended last.
pub fn render(report: &BatchReport) -> String {
    let mut out = String::new();

    out.push_str("Analysis results\n\n");

    out.push_str("Participants:\n");
    if report.summary.users.is_empty() {
        out.push_str("  (none found)\n");
    } else {
        for (id, name) in &report.summary.users {
            out.push_str(&format!("  - {} ({})\n", name, id));
        }
    }

    out.push_str("\nMentions (@username):\n");
    if report.summary.mentions.is_empty() {
        out.push_str("  (none found)\n");
    } else {
        for mention in &report.summary.mentions {
            out.push_str(&format!("  - @{}\n", mention));
        }
    }

    if !report.warnings.is_empty() {
        out.push_str("\nSkipped files:\n");
        for warning in &report.warnings {
            out.push_str(&format!("  - {}\n", warning));
        }
    }

    out
}
