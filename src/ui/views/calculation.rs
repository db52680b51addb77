use pegada::domain::entities::CalculationResult;
use pegada::Locale;

use crate::ui::primitives::text::{pad_to_width, ColoredText};
use crate::ui::theme::Icons;

struct Labels {
    total: &'static str,
    daily: &'static str,
    annual: &'static str,
    frequency: &'static str,
}

fn labels(locale: Locale) -> Labels {
    match locale {
        Locale::PtBr => Labels {
            total: "Total",
            daily: "Diário",
            annual: "Anual",
            frequency: "Frequência",
        },
        Locale::En => Labels {
            total: "Total",
            daily: "Daily",
            annual: "Annual",
            frequency: "Frequency",
        },
    }
}

/// Quantity with its unit, e.g. "100 km" or "2.5 kg"
pub fn quantity_with_unit(quantity: f64, unit: &str) -> String {
    format!("{} {}", quantity, unit)
}

pub fn render_result(
    result: &CalculationResult,
    locale: Locale,
    supports_color: bool,
    icons: Icons,
) -> String {
    let l = labels(locale);
    let width = [l.total, l.daily, l.annual, l.frequency]
        .iter()
        .map(|s| unicode_width::UnicodeWidthStr::width(*s))
        .max()
        .unwrap_or(0)
        + 1;

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}: {}\n",
        ColoredText::success(icons.success).render(supports_color),
        ColoredText::plain(result.activity.name.as_str())
            .bold()
            .render(supports_color),
        quantity_with_unit(result.quantity, &result.activity.unit),
    ));

    let row = |label: &str, value: String| {
        format!("  {} {}\n", pad_to_width(&format!("{label}:"), width), value)
    };

    if result.frequency != 1 {
        out.push_str(&row(l.frequency, result.frequency.to_string()));
    }
    out.push_str(&row(
        l.total,
        ColoredText::info(result.formatted_total.as_str())
            .bold()
            .render(supports_color),
    ));
    out.push_str(&row(l.daily, result.formatted_daily.clone()));
    out.push_str(&row(l.annual, result.formatted_annual.clone()));
    out.push_str(&format!(
        "  {} {}\n",
        icons.earth,
        ColoredText::dim(result.equivalence.as_str()).render(supports_color)
    ));
    out
}

pub fn render_failure(message: &str, supports_color: bool, icons: Icons) -> String {
    format!(
        "{} {}\n",
        ColoredText::error(icons.error).render(supports_color),
        ColoredText::error(message).render(supports_color)
    )
}
