//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use tracing::info;

use crate::application::{CalculateOptions, CalculateUseCase};
use crate::config::Config;
use crate::domain::entities::Catalog;
use crate::error::PegadaResult;
use crate::infrastructure::{builtin_catalog, TomlCatalogRepository};

/// Type alias for the concrete CalculateUseCase
pub type ConcreteCalculateUseCase = CalculateUseCase<Catalog>;

/// Catalog selected by the configuration: a TOML file or the built-in table
pub fn load_catalog(config: &Config) -> PegadaResult<Catalog> {
    match &config.catalog.path {
        Some(path) => {
            info!(path = %path.display(), "using custom catalog");
            TomlCatalogRepository::new().load(path)
        }
        None => Ok(builtin_catalog().clone()),
    }
}

/// Options derived from the configuration
pub fn calculate_options(config: &Config) -> CalculateOptions {
    CalculateOptions::new()
        .with_locale(config.output.locale)
        .with_decimals(config.output.decimals)
}

/// Create a calculate use case with all dependencies wired up
pub fn create_calculate_use_case(config: &Config) -> PegadaResult<ConcreteCalculateUseCase> {
    let catalog = load_catalog(config)?;
    Ok(CalculateUseCase::new(catalog, calculate_options(config)))
}
