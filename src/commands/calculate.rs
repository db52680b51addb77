use anyhow::Result;
use pegada::presentation::{factory, OutcomeEnvelope};
use pegada::CalculationInput;

use super::CommandContext;
use crate::ui::json::{self, events::DataEvent};
use crate::ui::views::calculation::{render_failure, render_result};

pub fn cmd_calculate(
    ctx: &CommandContext,
    activity: &str,
    quantity: f64,
    frequency: u32,
) -> Result<bool> {
    ctx.start()?;

    let use_case = factory::create_calculate_use_case(&ctx.config)?;
    let input = CalculationInput::new(activity, quantity).with_frequency(frequency);
    let outcome = use_case.calculate(&input);

    if ctx.ui.json {
        let envelope = OutcomeEnvelope::from(&outcome);
        json::emit_event(&DataEvent::new("result", ctx.command, &envelope))?;
        return ctx.complete(envelope.is_success());
    }

    let icons = ctx.ui.icons();
    match &outcome {
        Ok(result) => print!(
            "{}",
            render_result(result, ctx.config.output.locale, ctx.ui.color, icons)
        ),
        Err(failure) => eprint!("{}", render_failure(&failure.message, ctx.ui.color, icons)),
    }
    Ok(outcome.is_ok())
}
