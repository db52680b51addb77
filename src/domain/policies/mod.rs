//! Domain Policies
//!
//! Business rules that decide whether an input may be calculated.

pub mod validation;

pub use validation::{validate_input, ValidationError};
