use anyhow::{Context, Result};
use serde::Serialize;

use super::CommandContext;
use crate::ui::json::{self, events::DataEvent};
use crate::ui::views::config::render_config;

#[derive(Serialize)]
struct ConfigPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a std::path::Path>,
    config: &'a pegada::Config,
}

pub fn cmd_config(ctx: &CommandContext) -> Result<bool> {
    ctx.start()?;

    if ctx.ui.json {
        let payload = ConfigPayload {
            source: ctx.config_source.as_deref(),
            config: &ctx.config,
        };
        json::emit_event(&DataEvent::new("config", ctx.command, &payload))?;
        return ctx.complete(true);
    }

    let toml = toml::to_string_pretty(&ctx.config).context("serializing config")?;
    print!(
        "{}",
        render_config(&toml, ctx.config_source.as_deref(), ctx.ui.color)
    );
    Ok(true)
}
