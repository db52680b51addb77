//! Catalog entity
//!
//! An ordered, validated collection of activity definitions. Construction is
//! the only place a catalog can fail; afterwards it is read-only.

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::ports::ActivityCatalog;

use super::ActivityDefinition;

/// Errors raised while building a catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Two activities share an id
    #[error("duplicate activity id '{id}'")]
    DuplicateActivityId { id: String },

    /// An activity has an empty id
    #[error("activity '{name}' has an empty id")]
    EmptyId { name: String },

    /// Factor is negative, NaN or infinite
    #[error("activity '{id}' has invalid emission factor {factor}")]
    InvalidFactor { id: String, factor: f64 },
}

/// Read-only activity catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    activities: Vec<ActivityDefinition>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, keeping the authored order.
    pub fn new(activities: Vec<ActivityDefinition>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(activities.len());

        for (position, activity) in activities.iter().enumerate() {
            if activity.id.trim().is_empty() {
                return Err(CatalogError::EmptyId {
                    name: activity.name.clone(),
                });
            }
            if !activity.factor.is_finite() || activity.factor < 0.0 {
                return Err(CatalogError::InvalidFactor {
                    id: activity.id.clone(),
                    factor: activity.factor,
                });
            }
            if index.insert(activity.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateActivityId {
                    id: activity.id.clone(),
                });
            }
        }

        Ok(Self { activities, index })
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl ActivityCatalog for Catalog {
    fn all(&self) -> &[ActivityDefinition] {
        &self.activities
    }

    fn lookup(&self, id: &str) -> Option<&ActivityDefinition> {
        self.index.get(id).map(|&position| &self.activities[position])
    }
}
