use pegada::config::ConfigWarning;

use crate::ui::json::{self, events::WarningEvent};
use crate::ui::theme::Icons;

/// One human-readable line per unknown key, with a suggestion when close
pub fn format_config_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut message = format!("Unknown config key '{}' in {}", warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        message.push_str(&format!(". Did you mean '{}'?", suggestion));
    }
    message
}

pub fn print_config_warnings(warnings: &[ConfigWarning], json: bool, command: &str, icons: Icons) {
    for warning in warnings {
        let message = format_config_warning(warning);
        if json {
            let _ = json::emit_event(&WarningEvent::new(command, message));
        } else {
            eprintln!("{} {}", icons.warning, message);
        }
    }
}
