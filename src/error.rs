//! Error types for Pegada
//!
//! Uses `thiserror` for library errors. Calculation failures are not errors
//! of this type: they are recoverable outcomes (see `application::calculate`).

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::CatalogError;

/// Result type alias for Pegada operations
pub type PegadaResult<T> = Result<T, PegadaError>;

/// Main error type for Pegada operations
#[derive(Error, Debug)]
pub enum PegadaError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Catalog file could not be parsed
    #[error("invalid catalog in {file}: {message}")]
    InvalidCatalogFile { file: PathBuf, message: String },

    /// Catalog file parsed but its contents are inconsistent
    #[error("invalid catalog in {file}: {source}")]
    Catalog {
        file: PathBuf,
        #[source]
        source: CatalogError,
    },

    /// Batch file could not be parsed
    #[error("invalid batch file {file}: {message}")]
    InvalidBatchFile { file: PathBuf, message: String },

    /// Batch file extension is neither json nor toml
    #[error("unsupported batch file '{file}' (extension '{extension}', expected json or toml)")]
    UnsupportedBatchFormat { file: PathBuf, extension: String },
}
