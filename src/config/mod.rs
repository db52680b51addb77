//! Configuration module for Pegada
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PEGADA_*)
//! 3. Project config (./pegada.toml)
//! 4. User config (~/.config/pegada/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{candidate_paths, locate, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CatalogConfig, ColorMode, Config, OutputConfig};
