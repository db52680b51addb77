//! Calculate Use Case Module
//!
//! Single and batch emission calculations.

mod options;
mod result;
mod use_case;

pub use options::CalculateOptions;
pub use result::{
    BatchItemError, BatchResult, CalculationError, CalculationFailure, Outcome,
};
pub use use_case::CalculateUseCase;
