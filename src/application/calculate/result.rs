//! Calculate Result
//!
//! Outcome types for single and batch calculations.

use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::CalculationResult;
use crate::domain::policies::ValidationError;
use crate::domain::services::{EmissionError, Messages};

/// Why a calculation did not produce a result
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// Bad or missing input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The arithmetic guard rejected the inputs
    #[error(transparent)]
    Arithmetic(#[from] EmissionError),
}

impl CalculationError {
    /// Render through the locale's templates
    pub fn localized(&self, messages: &Messages) -> String {
        match self {
            CalculationError::Validation(e) => messages.validation_error(e),
            CalculationError::Arithmetic(e) => messages.arithmetic_error(e),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CalculationError::Validation(_))
    }
}

/// A failed calculation: the cause plus its user-facing message
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct CalculationFailure {
    pub kind: CalculationError,
    pub message: String,
}

impl CalculationFailure {
    pub fn new(kind: CalculationError, messages: &Messages) -> Self {
        let message = kind.localized(messages);
        Self { kind, message }
    }
}

/// Result of one calculation: data or a recoverable failure
pub type Outcome = Result<CalculationResult, CalculationFailure>;

/// One failed batch entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchItemError {
    /// Zero-based position in the batch
    pub index: usize,
    /// Labelled message, e.g. "Atividade 3: Rota não encontrada"
    pub message: String,
}

/// Aggregate of a batch calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    /// True when no entry failed
    pub success: bool,
    /// Sum of the successful totals
    pub total_co2_kg: f64,
    pub formatted_total: String,
    /// Successful results, in input order
    pub results: Vec<CalculationResult>,
    /// Failed entries, in input order
    pub errors: Vec<BatchItemError>,
    /// Equivalence message for `total_co2_kg`
    pub equivalence: String,
}

impl BatchResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn entry_count(&self) -> usize {
        self.results.len() + self.errors.len()
    }
}
