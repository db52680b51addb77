//! Calculate Options

use crate::domain::services::DEFAULT_DECIMALS;
use crate::domain::value_objects::Locale;

/// Presentation choices applied to every calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculateOptions {
    /// Message templates to use
    pub locale: Locale,
    /// Fraction digits in formatted values
    pub decimals: usize,
}

impl CalculateOptions {
    pub fn new() -> Self {
        Self {
            locale: Locale::default(),
            decimals: DEFAULT_DECIMALS,
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}

impl Default for CalculateOptions {
    fn default() -> Self {
        Self::new()
    }
}
