//! Category value object - the three fixed activity groups
//!
//! - `Transportation`: distance-based activities (km)
//! - `Energy`: consumption-based activities (kWh)
//! - `Food`: mass-based activities (kg)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Activity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Cars, buses, trains, flights
    Transportation,
    /// Grid electricity and fuels burned for heat
    Energy,
    /// Food production
    Food,
}

impl Category {
    /// Every category, in catalog order
    pub const ALL: [Category; 3] = [Category::Transportation, Category::Energy, Category::Food];

    /// Stable identifier used in config files and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transportation => "transportation",
            Category::Energy => "energy",
            Category::Food => "food",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}' (expected transportation, energy or food)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "transportation" | "transport" => Ok(Category::Transportation),
            "energy" => Ok(Category::Energy),
            "food" => Ok(Category::Food),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
