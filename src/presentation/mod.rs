//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - JSON output envelopes
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Serializable output shapes
//!
//! ## Usage
//!
//! ```no_run
//! use pegada::config::Config;
//! use pegada::domain::entities::CalculationInput;
//! use pegada::presentation::factory;
//!
//! let use_case = factory::create_calculate_use_case(&Config::default())?;
//! let outcome = use_case.calculate(&CalculationInput::new("car", 100.0));
//! # Ok::<(), pegada::PegadaError>(())
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{resolve_frequency, Cli, ColorWhen, Commands};
pub use factory::{create_calculate_use_case, ConcreteCalculateUseCase};
pub use output::OutcomeEnvelope;
