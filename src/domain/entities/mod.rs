//! Domain Entities
//!
//! - `ActivityDefinition` - One emission source and its factor
//! - `Catalog` - Validated, ordered set of activities
//! - `CalculationInput` / `CalculationResult` - One calculation's input and output

mod activity;
mod calculation;
mod catalog;

pub use activity::ActivityDefinition;
pub use calculation::{CalculationInput, CalculationResult};
pub use catalog::{Catalog, CatalogError};
