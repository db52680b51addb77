//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --locale, --decimals, --catalog, --verbose)
//!   are inherited by all subcommands
//! - Quantities may be negative on the command line so that validation, not
//!   the argument parser, reports them

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::services::MAX_DECIMALS;
use crate::domain::value_objects::{Category, FrequencyPreset, Locale, DEFAULT_FREQUENCY};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Pegada - carbon footprint calculator
#[derive(Parser, Debug)]
#[command(name = "pegada")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'pegada catalog' to list the available activities.")]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Message language (pt-br, en)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Fraction digits in formatted values (0-20)
    #[arg(long, global = true, value_parser = parse_decimals)]
    pub decimals: Option<usize>,

    /// Replace the built-in catalog with a TOML file
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate the emissions of one activity
    #[command(allow_negative_numbers = true)]
    Calculate {
        /// Activity id (see `pegada catalog`)
        activity: String,

        /// Quantity in the activity's unit (km, kWh, kg)
        quantity: f64,

        /// Recurrence count
        #[arg(short, long, conflicts_with = "preset")]
        frequency: Option<u32>,

        /// Named recurrence (once, weekly, monthly, yearly)
        #[arg(short, long)]
        preset: Option<FrequencyPreset>,
    },

    /// Calculate every entry of a JSON or TOML file
    Batch {
        /// Path to the batch file (.json or .toml)
        file: PathBuf,
    },

    /// List activities and their emission factors
    Catalog {
        /// Only list one category
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Show one activity
    Show {
        /// Activity id
        id: String,
    },

    /// Show the effective configuration
    Config,
}

impl Commands {
    /// Command name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Calculate { .. } => "calculate",
            Commands::Batch { .. } => "batch",
            Commands::Catalog { .. } => "catalog",
            Commands::Show { .. } => "show",
            Commands::Config => "config",
        }
    }
}

fn parse_decimals(value: &str) -> Result<usize, String> {
    let decimals: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a non-negative integer"))?;
    if decimals > MAX_DECIMALS {
        return Err(format!("{decimals} is above the maximum of {MAX_DECIMALS}"));
    }
    Ok(decimals)
}

/// Effective frequency from the `--frequency` / `--preset` pair
pub fn resolve_frequency(frequency: Option<u32>, preset: Option<FrequencyPreset>) -> u32 {
    preset
        .map(|p| p.times())
        .or(frequency)
        .unwrap_or(DEFAULT_FREQUENCY)
}
