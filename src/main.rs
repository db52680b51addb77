//! Pegada CLI - carbon footprint calculator
//!
//! Usage: pegada <COMMAND>
//!
//! Commands:
//!   calculate  Calculate the emissions of one activity
//!   batch      Calculate every entry of a JSON or TOML file
//!   catalog    List activities and their emission factors
//!   show       Show one activity
//!   config     Show the effective configuration

use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use pegada::presentation::{resolve_frequency, Cli, Commands};
use pegada::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod commands;
mod ui;

use commands::{CommandContext, LoadedConfig};
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.name();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            let ui = UiContext::new(cli.json, cli.color, &Config::default());
            ui::error::print_error(&err, cli.json, command, ui.color, ui.icons());
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` picks the level
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // Logs go to stderr so NDJSON on stdout stays parseable.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn run(cli: &Cli) -> Result<bool> {
    let cwd = std::env::current_dir().context("resolving current directory")?;
    let LoadedConfig {
        config,
        source,
        warnings,
    } = commands::load_config(&cwd)?;
    let config = commands::apply_cli_overrides(config, cli);

    let ui = UiContext::new(cli.json, cli.color, &config);
    ui::output::print_config_warnings(&warnings, ui.json, cli.command.name(), ui.icons());

    let ctx = CommandContext {
        command: cli.command.name(),
        config,
        config_source: source,
        ui,
        started: Instant::now(),
    };

    match &cli.command {
        Commands::Calculate {
            activity,
            quantity,
            frequency,
            preset,
        } => commands::calculate::cmd_calculate(
            &ctx,
            activity,
            *quantity,
            resolve_frequency(*frequency, *preset),
        ),
        Commands::Batch { file } => commands::batch::cmd_batch(&ctx, file),
        Commands::Catalog { category } => commands::catalog::cmd_catalog(&ctx, *category),
        Commands::Show { id } => commands::show::cmd_show(&ctx, id),
        Commands::Config => commands::config::cmd_config(&ctx),
    }
}
