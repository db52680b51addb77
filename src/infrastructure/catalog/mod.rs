//! Catalog implementations
//!
//! - `builtin` - the shipped reference table
//! - `toml_file` - user-supplied catalogs

mod builtin;
mod toml_file;

pub use builtin::builtin_catalog;
pub use toml_file::TomlCatalogRepository;
