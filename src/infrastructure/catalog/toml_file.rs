//! TOML Catalog Repository
//!
//! Loads a replacement catalog from a TOML file:
//!
//! ```toml
//! [[activity]]
//! id = "scooter"
//! name = "Scooter"
//! unit = "km"
//! category = "transportation"
//! factor = 0.03
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::{ActivityDefinition, Catalog};
use crate::error::{PegadaError, PegadaResult};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCatalog {
    #[serde(default, rename = "activity")]
    activities: Vec<ActivityDefinition>,
}

/// Reads catalogs from TOML files
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlCatalogRepository;

impl TomlCatalogRepository {
    pub fn new() -> Self {
        Self
    }

    /// Load and validate a catalog file
    pub fn load(&self, path: &Path) -> PegadaResult<Catalog> {
        let content = fs::read_to_string(path)?;
        let catalog = self.parse(&content, path)?;
        debug!(path = %path.display(), activities = catalog.len(), "loaded catalog file");
        Ok(catalog)
    }

    /// Parse catalog content; `path` is only used in error messages
    pub fn parse(&self, content: &str, path: &Path) -> PegadaResult<Catalog> {
        let parsed: TomlCatalog =
            toml::from_str(content).map_err(|e| PegadaError::InvalidCatalogFile {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if parsed.activities.is_empty() {
            return Err(PegadaError::InvalidCatalogFile {
                file: path.to_path_buf(),
                message: "no [[activity]] entries".to_string(),
            });
        }

        Catalog::new(parsed.activities).map_err(|source| PegadaError::Catalog {
            file: path.to_path_buf(),
            source,
        })
    }
}
