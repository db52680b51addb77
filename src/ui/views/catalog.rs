use pegada::domain::services::Messages;
use pegada::{ActivityDefinition, Category};

use crate::ui::primitives::text::{max_width, pad_to_width, ColoredText};
use crate::ui::theme::Icons;

/// Factor with its unit, e.g. "0.192 kg CO2/km"
pub fn factor_label(activity: &ActivityDefinition) -> String {
    format!("{} kg CO2/{}", activity.factor, activity.unit)
}

/// Activities grouped under their category titles, ids and names aligned
pub fn render_catalog(
    groups: &[(Category, Vec<&ActivityDefinition>)],
    messages: &Messages,
    supports_color: bool,
    icons: Icons,
) -> String {
    let all = groups.iter().flat_map(|(_, items)| items.iter());
    let id_width = max_width(all.clone().map(|a| a.id.as_str()));
    let name_width = max_width(all.map(|a| a.name.as_str()));

    let mut out = String::new();
    for (category, items) in groups {
        if items.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!(
            "{}\n",
            ColoredText::plain(messages.category_labels(*category).title)
                .bold()
                .render(supports_color)
        ));
        for activity in items {
            out.push_str(&format!(
                "  {} {}  {}  {}\n",
                icons.bullet,
                ColoredText::info(pad_to_width(&activity.id, id_width)).render(supports_color),
                pad_to_width(&activity.name, name_width),
                ColoredText::dim(factor_label(activity)).render(supports_color),
            ));
        }
    }
    out
}

fn field_labels(messages: &Messages) -> [&'static str; 4] {
    match messages.locale() {
        pegada::Locale::PtBr => ["Categoria", "Fator", "Unidade", "Descrição"],
        pegada::Locale::En => ["Category", "Factor", "Unit", "Description"],
    }
}

/// Detail view for one activity
pub fn render_activity(
    activity: &ActivityDefinition,
    messages: &Messages,
    supports_color: bool,
) -> String {
    let [category, factor, unit, description] = field_labels(messages);
    let width = max_width([category, factor, unit, description]) + 1;
    let row = |label: &str, value: &str| {
        format!("  {} {}\n", pad_to_width(&format!("{label}:"), width), value)
    };

    let mut out = format!(
        "{} {}\n",
        ColoredText::plain(activity.name.as_str())
            .bold()
            .render(supports_color),
        ColoredText::dim(format!("({})", activity.id)).render(supports_color),
    );
    out.push_str(&row(category, messages.category_labels(activity.category).title));
    out.push_str(&row(factor, &factor_label(activity)));
    out.push_str(&row(unit, &activity.unit));
    if let Some(text) = &activity.description {
        out.push_str(&row(description, text));
    }
    out
}
