//! Emission arithmetic
//!
//! Pure functions turning a quantity, an emission factor and a recurrence
//! count into total, daily and annualized kg of CO2.
//!
//! Annualization multiplies by `365 / frequency`, i.e. it reads `frequency`
//! as "occurrences per day". Callers pass 30 meaning "per month" and 7
//! meaning "per week", so the annual figure is only meaningful for
//! frequency 1. The formula is kept as-is for compatibility with existing
//! results.

use thiserror::Error;

/// Days used to extrapolate to a year
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Arithmetic guard failure
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EmissionError {
    /// Quantity or factor is negative (or not a number)
    #[error("values cannot be negative (quantity: {quantity}, factor: {factor})")]
    NegativeInput { quantity: f64, factor: f64 },

    #[error("values cannot be negative (frequency: {frequency})")]
    NegativeFrequency { frequency: i64 },

    #[error("frequency {frequency} is out of range")]
    FrequencyOutOfRange { frequency: i64 },

    /// The product overflowed `f64`
    #[error("calculated value is out of range (quantity: {quantity}, factor: {factor})")]
    NonFiniteTotal { quantity: f64, factor: f64 },
}

/// Total, daily and annual emissions of one calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionBreakdown {
    pub total_kg: f64,
    pub daily_kg: f64,
    pub annual_kg: f64,
}

/// Narrow a recurrence count read from user data
pub fn checked_frequency(frequency: i64) -> Result<u32, EmissionError> {
    if frequency < 0 {
        return Err(EmissionError::NegativeFrequency { frequency });
    }
    u32::try_from(frequency).map_err(|_| EmissionError::FrequencyOutOfRange { frequency })
}

/// `quantity * factor * frequency`
///
/// Fails instead of clamping when quantity or factor is negative. NaN is
/// treated as negative. A product too large for `f64` is an error too.
pub fn compute_total(quantity: f64, factor: f64, frequency: u32) -> Result<f64, EmissionError> {
    if !(quantity >= 0.0) || !(factor >= 0.0) {
        return Err(EmissionError::NegativeInput { quantity, factor });
    }
    let total = quantity * factor * f64::from(frequency);
    if !total.is_finite() {
        return Err(EmissionError::NonFiniteTotal { quantity, factor });
    }
    Ok(total)
}

/// `total / frequency`, exactly `0.0` for a zero-length period
pub fn compute_daily(total: f64, frequency: u32) -> f64 {
    if frequency == 0 {
        return 0.0;
    }
    total / f64::from(frequency)
}

/// `total` for frequency 1, otherwise `total * (365 / frequency)`
///
/// Frequency 0 yields `0.0`, like [`compute_daily`].
pub fn compute_annual(total: f64, frequency: u32) -> f64 {
    match frequency {
        0 => 0.0,
        1 => total,
        n => total * (DAYS_PER_YEAR / f64::from(n)),
    }
}

/// Run all three computations
pub fn compute_breakdown(
    quantity: f64,
    factor: f64,
    frequency: u32,
) -> Result<EmissionBreakdown, EmissionError> {
    let total_kg = compute_total(quantity, factor, frequency)?;
    Ok(EmissionBreakdown {
        total_kg,
        daily_kg: compute_daily(total_kg, frequency),
        annual_kg: compute_annual(total_kg, frequency),
    })
}
