use std::path::Path;

use crate::ui::primitives::text::ColoredText;

/// Effective config as TOML, preceded by where it came from
pub fn render_config(toml: &str, source: Option<&Path>, supports_color: bool) -> String {
    let origin = match source {
        Some(path) => format!("# {}", path.display()),
        None => "# built-in defaults".to_string(),
    };
    format!(
        "{}\n{}",
        ColoredText::dim(origin).render(supports_color),
        toml
    )
}
