//! Calculate Use Case
//!
//! Orchestrates validation, catalog lookup, arithmetic and message
//! formatting. Every call is independent: the use case holds only the
//! read-only catalog and presentation options.

use tracing::debug;

use crate::domain::entities::{CalculationInput, CalculationResult};
use crate::domain::policies::validate_input;
use crate::domain::ports::ActivityCatalog;
use crate::domain::services::{
    checked_frequency, compute_breakdown, equivalence_message, format_co2, Messages,
};
use crate::domain::value_objects::DEFAULT_FREQUENCY;

use super::options::CalculateOptions;
use super::result::{
    BatchItemError, BatchResult, CalculationError, CalculationFailure, Outcome,
};

/// Calculate use case - single entry point for emission calculations
pub struct CalculateUseCase<C>
where
    C: ActivityCatalog,
{
    catalog: C,
    options: CalculateOptions,
}

impl<C> CalculateUseCase<C>
where
    C: ActivityCatalog,
{
    pub fn new(catalog: C, options: CalculateOptions) -> Self {
        Self { catalog, options }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn options(&self) -> &CalculateOptions {
        &self.options
    }

    pub fn messages(&self) -> Messages {
        Messages::new(self.options.locale)
    }

    /// Calculate one input.
    ///
    /// Validation failures short-circuit before any arithmetic runs.
    pub fn calculate(&self, input: &CalculationInput) -> Outcome {
        let messages = self.messages();
        self.try_calculate(input, &messages).map_err(|kind| {
            debug!(
                activity = input.activity_id.as_deref().unwrap_or(""),
                reason = %kind,
                "calculation rejected"
            );
            CalculationFailure::new(kind, &messages)
        })
    }

    fn try_calculate(
        &self,
        input: &CalculationInput,
        messages: &Messages,
    ) -> Result<CalculationResult, CalculationError> {
        let (quantity, activity) = validate_input(input, &self.catalog)?;

        // A zero frequency means "not given", as in batch files with `frequency = 0`.
        let frequency = match checked_frequency(input.frequency)? {
            0 => DEFAULT_FREQUENCY,
            n => n,
        };

        let breakdown = compute_breakdown(quantity, activity.factor, frequency)?;
        let decimals = self.options.decimals;
        let locale = self.options.locale;

        debug!(
            activity = %activity.id,
            quantity,
            frequency,
            total_kg = breakdown.total_kg,
            "calculated emission"
        );

        Ok(CalculationResult {
            activity: activity.clone(),
            quantity,
            frequency,
            total_emission_kg: breakdown.total_kg,
            daily_emission_kg: breakdown.daily_kg,
            annual_emission_kg: breakdown.annual_kg,
            formatted_total: format_co2(breakdown.total_kg, decimals, locale),
            formatted_daily: format_co2(breakdown.daily_kg, decimals, locale),
            formatted_annual: format_co2(breakdown.annual_kg, decimals, locale),
            equivalence: equivalence_message(breakdown.total_kg, messages),
        })
    }

    /// Calculate every input, best-effort.
    ///
    /// A failing entry is recorded with its label and the rest proceed.
    pub fn calculate_batch(&self, inputs: &[CalculationInput]) -> BatchResult {
        let messages = self.messages();
        let mut total_co2_kg = 0.0;
        let mut results = Vec::new();
        let mut errors = Vec::new();

        for (index, input) in inputs.iter().enumerate() {
            match self.calculate(input) {
                Ok(result) => {
                    total_co2_kg += result.total_emission_kg;
                    results.push(result);
                }
                Err(failure) => errors.push(BatchItemError {
                    index,
                    message: format!("{}: {}", messages.batch_item(index), failure.message),
                }),
            }
        }

        debug!(
            entries = inputs.len(),
            failed = errors.len(),
            total_kg = total_co2_kg,
            "calculated batch"
        );

        BatchResult {
            success: errors.is_empty(),
            total_co2_kg,
            formatted_total: format_co2(total_co2_kg, self.options.decimals, self.options.locale),
            results,
            errors,
            equivalence: equivalence_message(total_co2_kg, &messages),
        }
    }
}
