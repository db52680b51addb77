//! Activity entity
//!
//! An activity is one selectable emission source (a transport mode, an energy
//! source or a food type) together with its emission factor.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Category;

/// Reference data for one activity
///
/// Activities are immutable once a catalog has been built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDefinition {
    /// Identifier, unique across every category
    pub id: String,
    /// Display name
    pub name: String,
    /// Unit the quantity is measured in (km, kWh, kg)
    pub unit: String,
    /// Group this activity belongs to
    pub category: Category,
    /// kg of CO2 per one unit
    pub factor: f64,
    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ActivityDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        category: Category,
        factor: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit: unit.into(),
            category,
            factor,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
