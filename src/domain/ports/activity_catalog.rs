//! ActivityCatalog port - read-only access to emission reference data
//!
//! The calculation use case depends on this trait only, so any source of
//! activity definitions (built-in table, TOML file, test fixture) can back it.

use crate::domain::entities::ActivityDefinition;
use crate::domain::value_objects::Category;

/// Read-only catalog of activity definitions
pub trait ActivityCatalog {
    /// Every activity, in authored order
    fn all(&self) -> &[ActivityDefinition];

    /// Find an activity by id
    fn lookup(&self, id: &str) -> Option<&ActivityDefinition> {
        self.all().iter().find(|activity| activity.id == id)
    }

    /// Activities of one category, in authored order
    fn list_by_category(&self, category: Category) -> Vec<&ActivityDefinition> {
        self.all()
            .iter()
            .filter(|activity| activity.category == category)
            .collect()
    }

    /// Emission factor for an id, `0.0` when the id is unknown
    fn factor_of(&self, id: &str) -> f64 {
        self.lookup(id).map(|activity| activity.factor).unwrap_or(0.0)
    }
}

impl<T: ActivityCatalog + ?Sized> ActivityCatalog for &T {
    fn all(&self) -> &[ActivityDefinition] {
        (**self).all()
    }

    fn lookup(&self, id: &str) -> Option<&ActivityDefinition> {
        (**self).lookup(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<ActivityDefinition>);

    impl ActivityCatalog for Fixed {
        fn all(&self) -> &[ActivityDefinition] {
            &self.0
        }
    }

    #[test]
    fn activity_catalog_trait_is_object_safe() {
        fn _assert_object_safe(_: &dyn ActivityCatalog) {}
    }

    #[test]
    fn default_methods_scan_all() {
        let catalog = Fixed(vec![
            ActivityDefinition::new("a", "A", "km", Category::Transportation, 0.5),
            ActivityDefinition::new("b", "B", "kg", Category::Food, 2.0),
        ]);

        assert_eq!(catalog.lookup("b").map(|a| a.name.as_str()), Some("B"));
        assert_eq!(catalog.list_by_category(Category::Food).len(), 1);
        assert_eq!(catalog.factor_of("a"), 0.5);
        assert_eq!(catalog.factor_of("zzz"), 0.0);
    }

    #[test]
    fn references_delegate() {
        let catalog = Fixed(vec![ActivityDefinition::new(
            "a",
            "A",
            "km",
            Category::Transportation,
            0.5,
        )]);
        let by_ref = &catalog;
        assert!(by_ref.lookup("a").is_some());
    }
}
