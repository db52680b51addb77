//! Property tests for kg / tons formatting.

use proptest::prelude::*;

use pegada::domain::services::format_co2;
use pegada::Locale;

fn locale() -> impl Strategy<Value = Locale> {
    prop_oneof![Just(Locale::PtBr), Just(Locale::En)]
}

proptest! {
    /// PROPERTY: values under 1000 kg are always shown in kg.
    #[test]
    fn property_below_threshold_is_kg(kg in 0.0f64..1000.0, decimals in 0usize..6, locale in locale()) {
        prop_assert!(format_co2(kg, decimals, locale).ends_with(" kg"));
    }

    /// PROPERTY: values at or above 1000 kg are never shown in kg.
    #[test]
    fn property_at_or_above_threshold_is_tons(kg in 1000.0f64..1e9, decimals in 0usize..6, locale in locale()) {
        let text = format_co2(kg, decimals, locale);
        prop_assert!(!text.ends_with(" kg"));
        prop_assert!(text.ends_with("toneladas") || text.ends_with("tons"));
    }

    /// PROPERTY: the requested number of fraction digits is honored.
    #[test]
    fn property_fraction_digits(kg in 0.0f64..1e6, decimals in 1usize..6) {
        let text = format_co2(kg, decimals, Locale::En);
        let number = text.split(' ').next().unwrap();
        let fraction = number.split('.').nth(1).unwrap();
        prop_assert_eq!(fraction.len(), decimals);
    }
}

#[test]
fn boundary_is_exactly_one_thousand() {
    assert!(format_co2(999.999, 2, Locale::En).ends_with("kg"));
    assert_eq!(format_co2(1000.0, 2, Locale::En), "1.00 tons");
    assert_eq!(format_co2(1000.0, 2, Locale::PtBr), "1.00 toneladas");
}
