//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Turns domain errors into recoverable, user-facing outcomes
//!
//! ## Use Cases
//!
//! - `CalculateUseCase` - Validate, look up, compute, format (single and batch)

pub mod calculate;

pub use calculate::{
    BatchItemError, BatchResult, CalculateOptions, CalculateUseCase, CalculationError,
    CalculationFailure, Outcome,
};
