//! Display formatting for CO2 quantities

use crate::domain::value_objects::Locale;

use super::messages::Messages;

/// Values at or above this many kg are shown in metric tons
pub const TONS_THRESHOLD_KG: f64 = 1000.0;

/// Fraction digits used when none are configured
pub const DEFAULT_DECIMALS: usize = 2;

/// Most fraction digits accepted from flags, env or config
pub const MAX_DECIMALS: usize = 20;

/// Format a kg quantity, switching to tons at 1000 kg.
///
/// `decimals` is capped at [`MAX_DECIMALS`].
///
/// ```
/// use pegada::domain::services::format_co2;
/// use pegada::domain::value_objects::Locale;
///
/// assert_eq!(format_co2(19.2, 2, Locale::PtBr), "19.20 kg");
/// assert_eq!(format_co2(6300.0, 2, Locale::PtBr), "6.30 toneladas");
/// assert_eq!(format_co2(6300.0, 1, Locale::En), "6.3 tons");
/// ```
pub fn format_co2(kg: f64, decimals: usize, locale: Locale) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    if kg >= TONS_THRESHOLD_KG {
        let suffix = Messages::new(locale).tons_suffix();
        return format!("{:.*} {}", decimals, kg / TONS_THRESHOLD_KG, suffix);
    }
    format!("{:.*} kg", decimals, kg)
}
