use std::path::Path;

use anyhow::{Context, Result};
use pegada::infrastructure::BatchFileRepository;
use pegada::presentation::factory;
use tracing::info;

use super::CommandContext;
use crate::ui::json::{self, events::DataEvent};
use crate::ui::views::batch::render_batch;

pub fn cmd_batch(ctx: &CommandContext, file: &Path) -> Result<bool> {
    ctx.start()?;

    let inputs = BatchFileRepository::new()
        .load(file)
        .with_context(|| format!("reading batch file {}", file.display()))?;
    info!(entries = inputs.len(), file = %file.display(), "loaded batch");

    let use_case = factory::create_calculate_use_case(&ctx.config)?;
    let batch = use_case.calculate_batch(&inputs);

    if ctx.ui.json {
        json::emit_event(&DataEvent::new("batch", ctx.command, &batch))?;
        return ctx.complete(batch.is_success());
    }

    print!(
        "{}",
        render_batch(&batch, ctx.config.output.locale, ctx.ui.color, ctx.ui.icons())
    );
    Ok(batch.is_success())
}
