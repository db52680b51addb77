//! Equivalence table
//!
//! Translates a kg-CO2 quantity into relatable comparisons. Each clause is
//! gated by an inclusive lower threshold and reports a rounded count.
//!
//! | Clause | Gate (kg) | Ratio |
//! |---|---|---|
//! | Trees | 20 | kg / 20 |
//! | Car km | 0.192 | kg / 0.192 |
//! | Flight hours | 25.5 | kg / 255 |
//! | Household days | 5 | kg / 50 |

use super::messages::Messages;

/// kg of CO2 one tree absorbs per year
pub const TREE_KG_PER_YEAR: f64 = 20.0;
/// kg of CO2 per km driven by an average car
pub const CAR_KG_PER_KM: f64 = 0.192;
/// kg of CO2 per hour of flight
pub const FLIGHT_KG_PER_HOUR: f64 = 255.0;
/// kg of CO2 of an average household per day
pub const HOUSEHOLD_KG_PER_DAY: f64 = 50.0;

/// One qualifying comparison with its rounded count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equivalence {
    Trees(u64),
    CarKilometers(u64),
    FlightHours(u64),
    HouseholdDays(u64),
}

impl Equivalence {
    pub fn count(&self) -> u64 {
        match *self {
            Equivalence::Trees(n)
            | Equivalence::CarKilometers(n)
            | Equivalence::FlightHours(n)
            | Equivalence::HouseholdDays(n) => n,
        }
    }
}

struct Rule {
    gate_kg: f64,
    reference_kg: f64,
    build: fn(u64) -> Equivalence,
}

// Order here is the order clauses appear in messages.
const RULES: [Rule; 4] = [
    Rule {
        gate_kg: TREE_KG_PER_YEAR,
        reference_kg: TREE_KG_PER_YEAR,
        build: Equivalence::Trees,
    },
    Rule {
        gate_kg: CAR_KG_PER_KM,
        reference_kg: CAR_KG_PER_KM,
        build: Equivalence::CarKilometers,
    },
    Rule {
        gate_kg: FLIGHT_KG_PER_HOUR / 10.0,
        reference_kg: FLIGHT_KG_PER_HOUR,
        build: Equivalence::FlightHours,
    },
    Rule {
        gate_kg: HOUSEHOLD_KG_PER_DAY / 10.0,
        reference_kg: HOUSEHOLD_KG_PER_DAY,
        build: Equivalence::HouseholdDays,
    },
];

/// Every qualifying comparison for `kg`, in fixed order
pub fn equivalences(kg: f64) -> Vec<Equivalence> {
    RULES
        .iter()
        .filter(|rule| kg >= rule.gate_kg)
        .map(|rule| (rule.build)(rounded_ratio(kg, rule.reference_kg)))
        .collect()
}

/// All qualifying clauses joined by the separator, or the fallback message
pub fn equivalence_message(kg: f64, messages: &Messages) -> String {
    let clauses: Vec<String> = equivalences(kg)
        .iter()
        .map(|equivalence| messages.equivalence(equivalence))
        .collect();

    if clauses.is_empty() {
        return messages.fallback().to_string();
    }
    clauses.join(messages.separator())
}

// f64::round rounds half away from zero; the cast saturates.
fn rounded_ratio(kg: f64, reference_kg: f64) -> u64 {
    (kg / reference_kg).round() as u64
}
