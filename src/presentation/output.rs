//! Output Envelopes
//!
//! Serializable shapes handed to JSON consumers. A single calculation is
//! wrapped as `{ "success": true, "data": {...} }` or
//! `{ "success": false, "error": "..." }`.

use serde::Serialize;

use crate::application::Outcome;
use crate::domain::entities::CalculationResult;

/// Plain-record form of an [`Outcome`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutcomeEnvelope<'a> {
    Success {
        success: bool,
        data: &'a CalculationResult,
    },
    Failure {
        success: bool,
        error: &'a str,
    },
}

impl<'a> From<&'a Outcome> for OutcomeEnvelope<'a> {
    fn from(outcome: &'a Outcome) -> Self {
        match outcome {
            Ok(data) => OutcomeEnvelope::Success {
                success: true,
                data,
            },
            Err(failure) => OutcomeEnvelope::Failure {
                success: false,
                error: &failure.message,
            },
        }
    }
}

impl OutcomeEnvelope<'_> {
    pub fn is_success(&self) -> bool {
        matches!(self, OutcomeEnvelope::Success { .. })
    }
}
