//! Domain Services
//!
//! Stateless calculation logic:
//! - `emission` - total / daily / annual arithmetic
//! - `equivalence` - relatable comparisons for a kg figure
//! - `formatting` - kg / tons display strings
//! - `messages` - shipped message templates per locale

pub mod emission;
pub mod equivalence;
pub mod formatting;
pub mod messages;

pub use emission::{
    checked_frequency, compute_annual, compute_breakdown, compute_daily, compute_total,
    EmissionBreakdown, EmissionError, DAYS_PER_YEAR,
};
pub use equivalence::{equivalence_message, equivalences, Equivalence};
pub use formatting::{format_co2, DEFAULT_DECIMALS, MAX_DECIMALS, TONS_THRESHOLD_KG};
pub use messages::{CategoryLabels, Messages};
