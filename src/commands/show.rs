use anyhow::{bail, Result};
use pegada::domain::policies::ValidationError;
use pegada::presentation::factory;
use pegada::ActivityCatalog;

use super::CommandContext;
use crate::ui::json::{self, events::DataEvent};
use crate::ui::views::catalog::render_activity;

pub fn cmd_show(ctx: &CommandContext, id: &str) -> Result<bool> {
    ctx.start()?;

    let catalog = factory::load_catalog(&ctx.config)?;
    let messages = ctx.messages();
    let Some(activity) = catalog.lookup(id) else {
        let reason = messages.validation_error(&ValidationError::ActivityNotFound {
            id: id.to_string(),
        });
        bail!("{}: '{}'", reason, id);
    };

    if ctx.ui.json {
        json::emit_event(&DataEvent::new("activity", ctx.command, activity))?;
        return ctx.complete(true);
    }

    print!("{}", render_activity(activity, &messages, ctx.ui.color));
    Ok(true)
}
