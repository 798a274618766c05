//! Document source adapters. Implement DocumentSource.

pub mod local_dir;

pub use local_dir::LocalDirSource;
