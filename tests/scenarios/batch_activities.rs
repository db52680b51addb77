//! Scenario: a week of activities in one file
//!
//! Journey: a user lists several activities in a batch file, one of them
//! with a typo, and gets a total for the valid ones plus a labelled error.

use std::path::Path;

use pegada::infrastructure::{BatchFileRepository, BatchFormat};
use pegada::presentation::factory;
use pegada::{CalculationInput, Config};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * b.abs().max(1.0)
}

/// SCENARIO: two valid entries and one unknown id
#[test]
fn scenario_batch_with_one_unknown_activity() {
    let content = r#"[
        { "activityId": "car", "quantity": 100 },
        { "activity": "teleport", "quantity": 5 },
        { "activity": "beef", "quantity": 10, "frequency": 1 }
    ]"#;
    let inputs = BatchFileRepository::new()
        .parse(content, BatchFormat::Json, Path::new("week.json"))
        .unwrap();

    let use_case = factory::create_calculate_use_case(&Config::default()).unwrap();
    let batch = use_case.calculate_batch(&inputs);

    assert!(!batch.success);
    assert!(approx(batch.total_co2_kg, 19.2 + 270.0));
    assert_eq!(batch.results.len(), 2);
    assert_eq!(batch.results[0].activity.id, "car");
    assert_eq!(batch.results[1].activity.id, "beef");
    assert_eq!(batch.errors.len(), 1);
    assert_eq!(batch.errors[0].index, 1);
    assert_eq!(batch.errors[0].message, "Atividade 2: Rota não encontrada");
    assert_eq!(batch.entry_count(), 3);
}

/// SCENARIO: a negative frequency fails its own entry only
#[test]
fn scenario_batch_with_one_negative_frequency() {
    let content = r#"[
        { "activity": "car", "quantity": 100 },
        { "activity": "beef", "quantity": 10, "frequency": -1 },
        { "activity": "beef", "quantity": 10 }
    ]"#;
    let inputs = BatchFileRepository::new()
        .parse(content, BatchFormat::Json, Path::new("week.json"))
        .unwrap();

    let use_case = factory::create_calculate_use_case(&Config::default()).unwrap();
    let batch = use_case.calculate_batch(&inputs);

    assert!(!batch.success);
    assert_eq!(batch.results.len(), 2);
    assert!(approx(batch.total_co2_kg, 19.2 + 270.0));
    assert_eq!(batch.errors.len(), 1);
    assert_eq!(batch.errors[0].index, 1);
    assert_eq!(
        batch.errors[0].message,
        "Atividade 2: Valores não podem ser negativos"
    );
}

/// SCENARIO: frequency 0 in a batch entry counts as once
#[test]
fn scenario_batch_zero_frequency_defaults_to_once() {
    let content = r#"
[[entry]]
activity = "train"
quantity = 100
frequency = 0
"#;
    let inputs = BatchFileRepository::new()
        .parse(content, BatchFormat::Toml, Path::new("trips.toml"))
        .unwrap();

    let use_case = factory::create_calculate_use_case(&Config::default()).unwrap();
    let batch = use_case.calculate_batch(&inputs);

    assert!(batch.success);
    let result = &batch.results[0];
    assert_eq!(result.frequency, 1);
    assert!(approx(result.total_emission_kg, 4.1));
    assert_eq!(result.daily_emission_kg, result.total_emission_kg);
}

/// SCENARIO: an empty batch is a successful zero
#[test]
fn scenario_empty_batch() {
    let use_case = factory::create_calculate_use_case(&Config::default()).unwrap();
    let batch = use_case.calculate_batch(&Vec::<CalculationInput>::new());

    assert!(batch.success);
    assert_eq!(batch.total_co2_kg, 0.0);
    assert_eq!(batch.formatted_total, "0.00 kg");
    assert_eq!(batch.equivalence, "Emissão calculada com sucesso!");
}
