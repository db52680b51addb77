//! Command handlers for the `pegada` binary.
//!
//! Each handler returns `Ok(true)` on success, `Ok(false)` when the command
//! ran but reported a calculation failure, and `Err` when it could not run.

pub mod batch;
pub mod calculate;
pub mod catalog;
pub mod config;
pub mod show;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use pegada::config::{self as cfg, Config, ConfigWarning};
use pegada::presentation::Cli;
use tracing::debug;

use crate::ui::context::UiContext;
use crate::ui::json::{self, events::CompleteEvent, events::StartEvent};

/// Everything a command needs: effective config plus rendering context
pub struct CommandContext {
    pub command: &'static str,
    pub config: Config,
    pub config_source: Option<PathBuf>,
    pub ui: UiContext,
    pub started: Instant,
}

impl CommandContext {
    pub fn messages(&self) -> pegada::domain::services::Messages {
        pegada::domain::services::Messages::new(self.config.output.locale)
    }

    /// Write the `start` event in JSON mode
    pub fn start(&self) -> Result<()> {
        if self.ui.json {
            json::emit_event(&StartEvent::new(self.command))?;
        }
        Ok(())
    }

    /// Write the `complete` event in JSON mode and pass `success` through
    pub fn complete(&self, success: bool) -> Result<bool> {
        if self.ui.json {
            let elapsed = self.started.elapsed().as_millis() as u64;
            json::emit_event(&CompleteEvent::new(self.command, success).with_duration(elapsed))?;
        }
        Ok(success)
    }
}

/// Config loaded from disk, before CLI flags are applied
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Resolve the config file for `project_root`, then apply `PEGADA_*` overrides.
pub fn load_config(project_root: &Path) -> Result<LoadedConfig> {
    let source = cfg::locate(Some(project_root));
    let (config, warnings) = match &source {
        Some(path) => Config::load_with_warnings(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => (Config::default(), Vec::new()),
    };
    debug!(source = ?source, warnings = warnings.len(), "loaded config");

    Ok(LoadedConfig {
        config: config.with_env_overrides(),
        source,
        warnings,
    })
}

/// CLI flags take precedence over every config layer
pub fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(locale) = cli.locale {
        config.output.locale = locale;
    }
    if let Some(decimals) = cli.decimals {
        config.output.decimals = decimals;
    }
    if let Some(path) = &cli.catalog {
        config.catalog.path = Some(path.clone());
    }
    config
}
