//! Input validation policy
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. quantity present, finite and greater than zero
//! 2. activity id present and not blank
//! 3. activity id known to the catalog, matched exactly

use thiserror::Error;

use crate::domain::entities::{ActivityDefinition, CalculationInput};
use crate::domain::ports::ActivityCatalog;

/// Recoverable input error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("provide a valid value greater than zero")]
    InvalidQuantity,

    #[error("select a valid option")]
    MissingActivity,

    #[error("activity not found: '{id}'")]
    ActivityNotFound { id: String },
}

/// Validate `input` and resolve its activity.
///
/// Returns the validated quantity alongside the catalog entry so callers do
/// not re-check the option.
pub fn validate_input<'c, C>(
    input: &CalculationInput,
    catalog: &'c C,
) -> Result<(f64, &'c ActivityDefinition), ValidationError>
where
    C: ActivityCatalog + ?Sized,
{
    let quantity = match input.quantity {
        Some(q) if q.is_finite() && q > 0.0 => q,
        _ => return Err(ValidationError::InvalidQuantity),
    };

    let id = match input.activity_id.as_deref() {
        Some(id) if !id.trim().is_empty() => id,
        _ => return Err(ValidationError::MissingActivity),
    };

    let activity = catalog
        .lookup(id)
        .ok_or_else(|| ValidationError::ActivityNotFound { id: id.to_string() })?;

    Ok((quantity, activity))
}
