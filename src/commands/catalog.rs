use anyhow::Result;
use pegada::presentation::factory;
use pegada::{ActivityCatalog, Category};

use super::CommandContext;
use crate::ui::json::{self, events::DataEvent};
use crate::ui::views::catalog::render_catalog;

pub fn cmd_catalog(ctx: &CommandContext, category: Option<Category>) -> Result<bool> {
    ctx.start()?;

    let catalog = factory::load_catalog(&ctx.config)?;
    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };
    let groups: Vec<_> = categories
        .into_iter()
        .map(|c| (c, catalog.list_by_category(c)))
        .collect();

    if ctx.ui.json {
        for activity in groups.iter().flat_map(|(_, items)| items.iter()) {
            json::emit_event(&DataEvent::new("activity", ctx.command, activity))?;
        }
        return ctx.complete(true);
    }

    print!(
        "{}",
        render_catalog(&groups, &ctx.messages(), ctx.ui.color, ctx.ui.icons())
    );
    Ok(true)
}
