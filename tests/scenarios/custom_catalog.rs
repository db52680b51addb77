//! Scenario: a team maintains its own emission factors
//!
//! Journey: the project config points at a TOML catalog; calculations use
//! its factors and reject ids that only exist in the built-in table.

use std::fs;

use pegada::config::Config;
use pegada::presentation::factory;
use pegada::{ActivityCatalog, CalculationInput, Locale, PegadaError};

const FACTORS: &str = r#"
[[activity]]
id = "scooter"
name = "Patinete elétrico"
unit = "km"
category = "transportation"
factor = 0.03

[[activity]]
id = "solar"
name = "Solar"
unit = "kWh"
category = "energy"
factor = 0.0
description = "Rooftop panels"
"#;

/// SCENARIO: project config selects a relative catalog path
#[test]
fn scenario_project_catalog_replaces_builtin() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("factors.toml"), FACTORS).unwrap();
    let config_path = dir.path().join("pegada.toml");
    fs::write(
        &config_path,
        "[output]\nlocale = \"en\"\n\n[catalog]\npath = \"factors.toml\"\n",
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.output.locale, Locale::En);

    let use_case = factory::create_calculate_use_case(&config).unwrap();
    assert_eq!(use_case.catalog().all().len(), 2);

    let result = use_case
        .calculate(&CalculationInput::new("scooter", 10.0))
        .unwrap();
    assert_eq!(result.formatted_total, "0.30 kg");
    assert_eq!(result.equivalence, "Equivalent to 2 km driven by car");

    let failure = use_case
        .calculate(&CalculationInput::new("car", 10.0))
        .unwrap_err();
    assert_eq!(failure.message, "activity not found");
}

/// SCENARIO: a zero factor is allowed and yields the fallback message
#[test]
fn scenario_zero_factor_activity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("factors.toml");
    fs::write(&path, FACTORS).unwrap();

    let mut config = Config::default();
    config.catalog.path = Some(path);
    let use_case = factory::create_calculate_use_case(&config).unwrap();

    let result = use_case
        .calculate(&CalculationInput::new("solar", 300.0))
        .unwrap();
    assert_eq!(result.total_emission_kg, 0.0);
    assert_eq!(result.equivalence, "Emissão calculada com sucesso!");
}

/// SCENARIO: duplicate ids are rejected when the catalog is built
#[test]
fn scenario_duplicate_ids_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("factors.toml");
    fs::write(&path, format!("{FACTORS}{FACTORS}")).unwrap();

    let mut config = Config::default();
    config.catalog.path = Some(path);
    let err = factory::create_calculate_use_case(&config).err().unwrap();
    assert!(matches!(err, PegadaError::Catalog { .. }), "{err}");
}
