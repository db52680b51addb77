//! Pegada - carbon footprint calculator
//!
//! Given an activity (transport mode, energy source or food type), a quantity
//! and a recurrence count, Pegada computes total, daily and annualized CO2
//! emissions and explains them with relatable equivalences (trees planted,
//! km driven, flight hours, household days).
//!
//! ```
//! use pegada::{builtin_catalog, CalculateOptions, CalculateUseCase, CalculationInput};
//!
//! let use_case = CalculateUseCase::new(builtin_catalog(), CalculateOptions::default());
//! let result = use_case.calculate(&CalculationInput::new("car", 100.0)).unwrap();
//! assert_eq!(result.formatted_total, "19.20 kg");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    BatchItemError, BatchResult, CalculateOptions, CalculateUseCase, CalculationError,
    CalculationFailure, Outcome,
};
pub use config::Config;
pub use domain::entities::{ActivityDefinition, CalculationInput, CalculationResult, Catalog};
pub use domain::ports::ActivityCatalog;
pub use domain::value_objects::{Category, FrequencyPreset, Locale};
pub use error::{PegadaError, PegadaResult};
pub use infrastructure::builtin_catalog;
