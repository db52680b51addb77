//! Property tests for catalog lookups.

use proptest::prelude::*;

use pegada::{builtin_catalog, ActivityCatalog, Category};

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Transportation),
        Just(Category::Energy),
        Just(Category::Food),
    ]
}

proptest! {
    /// PROPERTY: every listed id resolves back to an activity of that category.
    #[test]
    fn property_list_lookup_round_trip(c in category()) {
        let catalog = builtin_catalog();
        let listed = catalog.list_by_category(c);
        prop_assert!(!listed.is_empty());
        for activity in listed {
            let found = catalog.lookup(&activity.id).unwrap();
            prop_assert_eq!(found.category, c);
            prop_assert_eq!(found, activity);
        }
    }

    /// PROPERTY: lookup never panics and unknown ids have factor 0.
    #[test]
    fn property_unknown_ids(id in "[a-z_]{0,24}") {
        let catalog = builtin_catalog();
        match catalog.lookup(&id) {
            Some(activity) => prop_assert_eq!(catalog.factor_of(&id), activity.factor),
            None => prop_assert_eq!(catalog.factor_of(&id), 0.0),
        }
    }
}

#[test]
fn categories_partition_the_catalog() {
    let catalog = builtin_catalog();
    let listed: usize = Category::ALL
        .iter()
        .map(|c| catalog.list_by_category(*c).len())
        .sum();
    assert_eq!(listed, catalog.all().len());
    assert_eq!(listed, 19);
}
