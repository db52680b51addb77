//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `catalog/` - Built-in and TOML-file activity catalogs
//! - `repositories/` - Batch input files

pub mod catalog;
pub mod repositories;

// Re-export for convenience
pub use catalog::{builtin_catalog, TomlCatalogRepository};
pub use repositories::{BatchFileRepository, BatchFormat};
