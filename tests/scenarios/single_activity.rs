//! Scenario: one activity at a time
//!
//! Journey: a user picks an activity from the built-in catalog, enters a
//! quantity and optionally a recurrence, and reads totals plus a relatable
//! comparison.

use pegada::presentation::{factory, OutcomeEnvelope};
use pegada::{CalculateOptions, CalculateUseCase, CalculationInput, Config, Locale};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * b.abs().max(1.0)
}

fn use_case(locale: Locale) -> CalculateUseCase<pegada::Catalog> {
    let mut config = Config::default();
    config.output.locale = locale;
    factory::create_calculate_use_case(&config).unwrap()
}

/// SCENARIO: 100 km by car
#[test]
fn scenario_short_car_trip() {
    let result = use_case(Locale::PtBr)
        .calculate(&CalculationInput::new("car", 100.0))
        .unwrap();

    assert!(approx(result.total_emission_kg, 19.2));
    assert!(approx(result.daily_emission_kg, 19.2));
    assert!(approx(result.annual_emission_kg, 19.2));
    assert_eq!(result.formatted_total, "19.20 kg");
    assert!(result.equivalence.contains("100 km dirigindo um carro"));
    assert!(!result.equivalence.contains("árvore"));
}

/// SCENARIO: a month of electricity lands in tons
#[test]
fn scenario_monthly_electricity() {
    let result = use_case(Locale::PtBr)
        .calculate(&CalculationInput::new("electricity", 500.0).with_frequency(30))
        .unwrap();

    assert!(approx(result.total_emission_kg, 6300.0));
    assert!(approx(result.daily_emission_kg, 210.0));
    assert!(approx(result.annual_emission_kg, 76650.0));
    assert_eq!(result.formatted_total, "6.30 toneladas");
    assert_eq!(result.formatted_annual, "76.65 toneladas");
}

/// SCENARIO: 10 kg of beef qualifies for every comparison, in fixed order
#[test]
fn scenario_beef_all_equivalences() {
    let result = use_case(Locale::PtBr)
        .calculate(&CalculationInput::new("beef", 10.0))
        .unwrap();

    assert_eq!(result.total_emission_kg, 270.0);
    assert_eq!(
        result.equivalence,
        "Equivalente a 14 árvores plantadas por ano \
         | Equivalente a 1406 km dirigindo um carro \
         | Equivalente a 1 hora de voo \
         | Equivalente a 5 dias de consumo de uma casa"
    );
}

/// SCENARIO: no activity selected, in English
#[test]
fn scenario_missing_activity() {
    let input = CalculationInput {
        activity_id: None,
        quantity: Some(10.0),
        ..CalculationInput::default()
    };
    let outcome = use_case(Locale::En).calculate(&input);

    let failure = outcome.as_ref().unwrap_err();
    assert_eq!(failure.message, "select a valid option");
    assert!(failure.kind.is_validation());

    let json = serde_json::to_value(OutcomeEnvelope::from(&outcome)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "success": false, "error": "select a valid option" })
    );
}

/// SCENARIO: quantity is checked before the activity
#[test]
fn scenario_zero_quantity_reported_first() {
    let input = CalculationInput {
        activity_id: None,
        quantity: Some(0.0),
        ..CalculationInput::default()
    };
    let failure = use_case(Locale::PtBr).calculate(&input).unwrap_err();
    assert_eq!(failure.message, "Informe um valor válido maior que zero");
}

/// SCENARIO: tree equivalence starts exactly at 20 kg
#[test]
fn scenario_tree_threshold_is_inclusive() {
    let use_case = CalculateUseCase::new(
        pegada::builtin_catalog(),
        CalculateOptions::new().with_locale(Locale::En),
    );
    // vegetables: 2 kg CO2/kg
    let result = use_case
        .calculate(&CalculationInput::new("vegetables", 10.0))
        .unwrap();
    assert_eq!(result.total_emission_kg, 20.0);
    assert!(result
        .equivalence
        .starts_with("Equivalent to 1 tree planted for a year"));
}
