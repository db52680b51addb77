//! Frequency presets
//!
//! Frequency is a plain recurrence count. The presets name the values the
//! calculator form offers; any other non-negative count is still accepted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Frequency used when the caller does not supply one
pub const DEFAULT_FREQUENCY: u32 = 1;

/// Named recurrence counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyPreset {
    /// One-time activity
    Once,
    /// Seven occurrences
    Weekly,
    /// Thirty occurrences
    Monthly,
    /// 365 occurrences
    Yearly,
}

impl FrequencyPreset {
    pub const ALL: [FrequencyPreset; 4] = [
        FrequencyPreset::Once,
        FrequencyPreset::Weekly,
        FrequencyPreset::Monthly,
        FrequencyPreset::Yearly,
    ];

    /// Recurrence count for this preset
    pub fn times(&self) -> u32 {
        match self {
            FrequencyPreset::Once => 1,
            FrequencyPreset::Weekly => 7,
            FrequencyPreset::Monthly => 30,
            FrequencyPreset::Yearly => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyPreset::Once => "once",
            FrequencyPreset::Weekly => "weekly",
            FrequencyPreset::Monthly => "monthly",
            FrequencyPreset::Yearly => "yearly",
        }
    }
}

impl fmt::Display for FrequencyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown frequency preset '{0}' (expected once, weekly, monthly or yearly)")]
pub struct ParseFrequencyError(pub String);

impl FromStr for FrequencyPreset {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "once" | "one-time" => Ok(FrequencyPreset::Once),
            "weekly" => Ok(FrequencyPreset::Weekly),
            "monthly" => Ok(FrequencyPreset::Monthly),
            "yearly" | "annual" => Ok(FrequencyPreset::Yearly),
            other => Err(ParseFrequencyError(other.to_string())),
        }
    }
}
