//! Shipped message templates
//!
//! Every user-facing string produced by the domain goes through [`Messages`],
//! keyed by [`Locale`]. Counts of exactly 1 are singular; every other count,
//! zero included, is plural.

use crate::domain::policies::ValidationError;
use crate::domain::value_objects::{Category, Locale};

use super::emission::EmissionError;
use super::equivalence::Equivalence;

/// Labels a form or prompt shows for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLabels {
    pub title: &'static str,
    /// Prompt for choosing an activity
    pub selector: &'static str,
    /// Label for the quantity field, with its unit
    pub quantity: &'static str,
}

/// Template set for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Messages {
    locale: Locale,
}

fn plural(count: u64, suffix: &'static str) -> &'static str {
    if count == 1 {
        ""
    } else {
        suffix
    }
}

impl Messages {
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Joins equivalence clauses
    pub fn separator(&self) -> &'static str {
        " | "
    }

    pub fn tons_suffix(&self) -> &'static str {
        match self.locale {
            Locale::PtBr => "toneladas",
            Locale::En => "tons",
        }
    }

    /// Shown when no equivalence clause qualifies
    pub fn fallback(&self) -> &'static str {
        match self.locale {
            Locale::PtBr => "Emissão calculada com sucesso!",
            Locale::En => "Emission calculated successfully!",
        }
    }

    pub fn equivalence(&self, equivalence: &Equivalence) -> String {
        let n = equivalence.count();
        match (self.locale, equivalence) {
            (Locale::PtBr, Equivalence::Trees(_)) => {
                let s = plural(n, "s");
                format!("Equivalente a {n} árvore{s} plantada{s} por ano")
            }
            (Locale::PtBr, Equivalence::CarKilometers(_)) => {
                format!("Equivalente a {n} km dirigindo um carro")
            }
            (Locale::PtBr, Equivalence::FlightHours(_)) => {
                format!("Equivalente a {n} hora{} de voo", plural(n, "s"))
            }
            (Locale::PtBr, Equivalence::HouseholdDays(_)) => {
                format!(
                    "Equivalente a {n} dia{} de consumo de uma casa",
                    plural(n, "s")
                )
            }
            (Locale::En, Equivalence::Trees(_)) => {
                format!("Equivalent to {n} tree{} planted for a year", plural(n, "s"))
            }
            (Locale::En, Equivalence::CarKilometers(_)) => {
                format!("Equivalent to {n} km driven by car")
            }
            (Locale::En, Equivalence::FlightHours(_)) => {
                format!("Equivalent to {n} hour{} of flight", plural(n, "s"))
            }
            (Locale::En, Equivalence::HouseholdDays(_)) => {
                format!(
                    "Equivalent to {n} day{} of household consumption",
                    plural(n, "s")
                )
            }
        }
    }

    pub fn validation_error(&self, error: &ValidationError) -> String {
        let text = match (self.locale, error) {
            (Locale::PtBr, ValidationError::InvalidQuantity) => {
                "Informe um valor válido maior que zero"
            }
            (Locale::PtBr, ValidationError::MissingActivity) => "Selecione uma rota válida",
            (Locale::PtBr, ValidationError::ActivityNotFound { .. }) => "Rota não encontrada",
            (Locale::En, ValidationError::InvalidQuantity) => {
                "provide a valid value greater than zero"
            }
            (Locale::En, ValidationError::MissingActivity) => "select a valid option",
            (Locale::En, ValidationError::ActivityNotFound { .. }) => "activity not found",
        };
        text.to_string()
    }

    pub fn arithmetic_error(&self, error: &EmissionError) -> String {
        let text = match (self.locale, error) {
            (
                Locale::PtBr,
                EmissionError::NegativeInput { .. } | EmissionError::NegativeFrequency { .. },
            ) => "Valores não podem ser negativos",
            (Locale::PtBr, EmissionError::FrequencyOutOfRange { .. }) => {
                "Frequência fora do intervalo válido"
            }
            (Locale::PtBr, EmissionError::NonFiniteTotal { .. }) => {
                "Valor calculado fora do intervalo válido"
            }
            (
                Locale::En,
                EmissionError::NegativeInput { .. } | EmissionError::NegativeFrequency { .. },
            ) => "values cannot be negative",
            (Locale::En, EmissionError::FrequencyOutOfRange { .. }) => "frequency is out of range",
            (Locale::En, EmissionError::NonFiniteTotal { .. }) => "calculated value is out of range",
        };
        text.to_string()
    }

    /// Label for a batch entry; `index` is zero-based, the label one-based
    pub fn batch_item(&self, index: usize) -> String {
        match self.locale {
            Locale::PtBr => format!("Atividade {}", index + 1),
            Locale::En => format!("Activity {}", index + 1),
        }
    }

    pub fn category_labels(&self, category: Category) -> CategoryLabels {
        match (self.locale, category) {
            (Locale::PtBr, Category::Transportation) => CategoryLabels {
                title: "Transporte",
                selector: "Selecione o Meio de Transporte:",
                quantity: "Distância (km):",
            },
            (Locale::PtBr, Category::Energy) => CategoryLabels {
                title: "Energia",
                selector: "Selecione a Fonte de Energia:",
                quantity: "Consumo (kWh):",
            },
            (Locale::PtBr, Category::Food) => CategoryLabels {
                title: "Alimentação",
                selector: "Selecione o Alimento:",
                quantity: "Quantidade (kg):",
            },
            (Locale::En, Category::Transportation) => CategoryLabels {
                title: "Transportation",
                selector: "Select the transport mode:",
                quantity: "Distance (km):",
            },
            (Locale::En, Category::Energy) => CategoryLabels {
                title: "Energy",
                selector: "Select the energy source:",
                quantity: "Consumption (kWh):",
            },
            (Locale::En, Category::Food) => CategoryLabels {
                title: "Food",
                selector: "Select the food:",
                quantity: "Amount (kg):",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PT: Messages = Messages {
        locale: Locale::PtBr,
    };
    const EN: Messages = Messages { locale: Locale::En };

    #[test]
    fn trees_singular_and_plural() {
        assert_eq!(
            PT.equivalence(&Equivalence::Trees(1)),
            "Equivalente a 1 árvore plantada por ano"
        );
        assert_eq!(
            PT.equivalence(&Equivalence::Trees(14)),
            "Equivalente a 14 árvores plantadas por ano"
        );
        assert_eq!(
            EN.equivalence(&Equivalence::Trees(1)),
            "Equivalent to 1 tree planted for a year"
        );
    }

    #[test]
    fn zero_count_is_plural() {
        assert_eq!(
            PT.equivalence(&Equivalence::FlightHours(0)),
            "Equivalente a 0 horas de voo"
        );
        assert_eq!(
            EN.equivalence(&Equivalence::HouseholdDays(0)),
            "Equivalent to 0 days of household consumption"
        );
    }

    #[test]
    fn car_has_no_plural_form() {
        assert_eq!(
            PT.equivalence(&Equivalence::CarKilometers(1)),
            "Equivalente a 1 km dirigindo um carro"
        );
    }

    #[test]
    fn validation_messages() {
        assert_eq!(
            EN.validation_error(&ValidationError::MissingActivity),
            "select a valid option"
        );
        assert_eq!(
            PT.validation_error(&ValidationError::ActivityNotFound {
                id: "x".to_string()
            }),
            "Rota não encontrada"
        );
    }

    #[test]
    fn arithmetic_messages() {
        assert_eq!(
            PT.arithmetic_error(&EmissionError::NegativeFrequency { frequency: -1 }),
            "Valores não podem ser negativos"
        );
        assert_eq!(
            EN.arithmetic_error(&EmissionError::NonFiniteTotal {
                quantity: 1e308,
                factor: 27.0
            }),
            "calculated value is out of range"
        );
    }

    #[test]
    fn batch_item_is_one_based() {
        assert_eq!(PT.batch_item(0), "Atividade 1");
        assert_eq!(EN.batch_item(2), "Activity 3");
    }

    #[test]
    fn category_labels_carry_units() {
        assert!(PT.category_labels(Category::Energy).quantity.contains("kWh"));
        assert!(EN.category_labels(Category::Transportation).quantity.contains("km"));
    }
}
