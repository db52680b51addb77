//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod category;
mod frequency;
mod locale;

pub use category::{Category, ParseCategoryError};
pub use frequency::{FrequencyPreset, ParseFrequencyError, DEFAULT_FREQUENCY};
pub use locale::{Locale, ParseLocaleError};
