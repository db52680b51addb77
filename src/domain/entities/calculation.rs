//! Calculation entities
//!
//! `CalculationInput` is built per submission and discarded after use;
//! `CalculationResult` is produced once per successful calculation.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DEFAULT_FREQUENCY;

use super::ActivityDefinition;

fn default_frequency() -> i64 {
    i64::from(DEFAULT_FREQUENCY)
}

/// Raw user input for one calculation
///
/// `activity_id` and `quantity` are optional so that "missing" can be
/// reported as a validation failure instead of a parse error. `frequency`
/// is signed for the same reason: a negative count in a batch file fails
/// that entry, not the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    #[serde(default, alias = "activityId", alias = "activity")]
    pub activity_id: Option<String>,

    #[serde(default, alias = "value")]
    pub quantity: Option<f64>,

    #[serde(default = "default_frequency")]
    pub frequency: i64,
}

impl CalculationInput {
    pub fn new(activity_id: impl Into<String>, quantity: f64) -> Self {
        Self {
            activity_id: Some(activity_id.into()),
            quantity: Some(quantity),
            frequency: default_frequency(),
        }
    }

    pub fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = i64::from(frequency);
        self
    }
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            activity_id: None,
            quantity: None,
            frequency: default_frequency(),
        }
    }
}

/// Outcome data of a successful calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Snapshot of the resolved activity
    pub activity: ActivityDefinition,
    pub quantity: f64,
    pub frequency: u32,
    pub total_emission_kg: f64,
    pub daily_emission_kg: f64,
    pub annual_emission_kg: f64,
    pub formatted_total: String,
    pub formatted_daily: String,
    pub formatted_annual: String,
    /// Human-relatable comparison for the total
    pub equivalence: String,
}
