//! Infrastructure adapters. Implement ports.
//!
//! Filesystem document source, terminal UI. Map errors to DomainError.

pub mod source;
pub mod ui;
