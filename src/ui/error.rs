use pegada::PegadaError;

use crate::ui::json::{self, events::ErrorEvent};
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::Icons;

/// Follow-up hint for errors the user can fix
fn help_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<PegadaError>()? {
        PegadaError::InvalidConfig { .. } => Some("Fix the config file or run 'pegada config' to inspect the defaults."),
        PegadaError::InvalidCatalogFile { .. } | PegadaError::Catalog { .. } => {
            Some("Each [[activity]] needs a unique id, a name, a category and a factor >= 0.")
        }
        PegadaError::InvalidBatchFile { .. } => {
            Some("Entries need 'activity' and 'quantity'; 'frequency' is optional.")
        }
        PegadaError::UnsupportedBatchFormat { .. } => Some("Use a .json or .toml batch file."),
        PegadaError::Io(_) => None,
    }
}

/// Error message with its cause chain, e.g. "reading x: No such file"
pub fn error_chain(err: &anyhow::Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, icons: Icons) -> String {
    let mut out = format!(
        "{} {}\n",
        ColoredText::error(icons.error).render(supports_color),
        ColoredText::error(error_chain(err)).render(supports_color)
    );
    if let Some(help) = help_for(err) {
        out.push_str(&format!(
            "  {} {}\n",
            icons.arrow,
            ColoredText::dim(help).render(supports_color)
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool, command: &str, supports_color: bool, icons: Icons) {
    if json {
        let mut event = ErrorEvent::new(command, error_chain(err));
        if let Some(help) = help_for(err) {
            event = event.with_help(help);
        }
        let _ = json::emit_event(&event);
        return;
    }

    eprint!("{}", format_error(err, supports_color, icons));
}
