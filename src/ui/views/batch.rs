use pegada::{BatchResult, Locale};

use crate::ui::primitives::text::{max_width, pad_to_width, ColoredText};
use crate::ui::theme::Icons;

use super::calculation::quantity_with_unit;

fn summary_label(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Total do lote",
        Locale::En => "Batch total",
    }
}

fn counts(locale: Locale, ok: usize, failed: usize) -> String {
    match locale {
        Locale::PtBr => format!("{ok} calculada(s), {failed} com erro"),
        Locale::En => format!("{ok} calculated, {failed} failed"),
    }
}

pub fn render_batch(
    batch: &BatchResult,
    locale: Locale,
    supports_color: bool,
    icons: Icons,
) -> String {
    let mut out = String::new();

    let width = max_width(batch.results.iter().map(|r| r.activity.name.as_str()));
    for result in &batch.results {
        out.push_str(&format!(
            "{} {}  {:>10}  {} {}\n",
            ColoredText::success(icons.success).render(supports_color),
            pad_to_width(&result.activity.name, width),
            quantity_with_unit(result.quantity, &result.activity.unit),
            icons.arrow,
            result.formatted_total,
        ));
    }

    for error in &batch.errors {
        out.push_str(&format!(
            "{} {}\n",
            ColoredText::error(icons.error).render(supports_color),
            ColoredText::error(error.message.as_str()).render(supports_color),
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "{}: {}\n",
        summary_label(locale),
        ColoredText::info(batch.formatted_total.as_str())
            .bold()
            .render(supports_color),
    ));
    out.push_str(&format!(
        "{} {}\n",
        icons.earth,
        ColoredText::dim(batch.equivalence.as_str()).render(supports_color)
    ));
    out.push_str(&format!(
        "{}\n",
        ColoredText::dim(counts(locale, batch.results.len(), batch.errors.len()))
            .render(supports_color)
    ));
    out
}
