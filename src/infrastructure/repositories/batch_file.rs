//! Batch File Repository
//!
//! Reads a list of calculation inputs from disk. Two formats are accepted,
//! chosen by extension:
//!
//! - `.json`: an array of `{ "activity_id", "quantity", "frequency" }` objects
//! - `.toml`: a list of `[[entry]]` tables with the same keys

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::CalculationInput;
use crate::error::{PegadaError, PegadaResult};

#[derive(Debug, Deserialize)]
struct TomlBatch {
    #[serde(default, rename = "entry")]
    entries: Vec<CalculationInput>,
}

/// Batch file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    Json,
    Toml,
}

impl BatchFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> PegadaResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match extension.as_str() {
            "json" => Ok(BatchFormat::Json),
            "toml" => Ok(BatchFormat::Toml),
            _ => Err(PegadaError::UnsupportedBatchFormat {
                file: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Reads batch input files
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchFileRepository;

impl BatchFileRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> PegadaResult<Vec<CalculationInput>> {
        let format = BatchFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let entries = self.parse(&content, format, path)?;
        debug!(path = %path.display(), entries = entries.len(), "loaded batch file");
        Ok(entries)
    }

    pub fn parse(
        &self,
        content: &str,
        format: BatchFormat,
        path: &Path,
    ) -> PegadaResult<Vec<CalculationInput>> {
        let invalid = |message: String| PegadaError::InvalidBatchFile {
            file: path.to_path_buf(),
            message,
        };

        match format {
            BatchFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string())),
            BatchFormat::Toml => toml::from_str::<TomlBatch>(content)
                .map(|batch| batch.entries)
                .map_err(|e| invalid(e.to_string())),
        }
    }
}
