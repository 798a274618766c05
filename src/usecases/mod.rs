//! Application use cases. Orchestrate domain logic via ports.

pub mod analyzer;
pub mod report_service;

pub use analyzer::analyze_document;
pub use report_service::{BatchReport, ReportService};
