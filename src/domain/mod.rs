//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod session;

pub use entities::{ChatSummary, DocumentWarning, PendingDocument, UserId};
pub use errors::DomainError;
pub use session::Session;
