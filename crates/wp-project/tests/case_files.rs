use std::path::Path;
use wp_curves::{Phase, Regime, SpacingMethod};
use wp_project::schema::*;
use wp_project::{CaseFormat, ProjectError, ValidationError, parse_case, validate_case};

const SUPPORTED: [&str; 5] = [
    "../../cases/01_oil_well_pseudosteady.yaml",
    "../../cases/02_gas_well.yaml",
    "../../cases/03_two_phase_vogel.yaml",
    "../../cases/04_gas_transient.json",
    "../../cases/05_legacy_roughness.yaml",
];

#[test]
fn sample_cases_load() {
    for path in SUPPORTED {
        let case = wp_project::load_case(Path::new(path))
            .unwrap_or_else(|e| panic!("{path} should load: {e}"));
        assert_eq!(case.version, wp_project::LATEST_VERSION);
    }
}

#[test]
fn legacy_roughness_is_migrated() {
    let case = wp_project::load_case(Path::new("../../cases/05_legacy_roughness.yaml")).unwrap();
    let outflow = case.outflow.unwrap();
    assert_eq!(outflow.roughness, RoughnessDef::Relative { relative: 0.0006 });
    assert_eq!(case.inflow.unwrap().spacing.method, SpacingMethod::RateStep);
}

#[test]
fn two_phase_transient_is_rejected() {
    let err = wp_project::load_case(Path::new("../../cases/unsupported/two_phase_transient.yaml"))
        .unwrap_err();
    assert!(
        matches!(
            err,
            ProjectError::Validation(ValidationError::Unsupported { .. })
        ),
        "unexpected error: {err}"
    );
}

#[test]
fn unknown_extension_is_rejected() {
    let err = wp_project::load_case(Path::new("case.toml")).unwrap_err();
    assert!(matches!(err, ProjectError::UnsupportedFormat { .. }));
}

#[test]
fn missing_required_field_is_named() {
    let yaml = r#"
version: 2
name: incomplete
inflow:
  phase: liquid
  regime: pseudosteady
  permeability: 50
  thickness: 20
  viscosity: 2
  formation_volume_factor: 1.2
  drainage_radius: 1000
  wellbore_radius: 0.3
"#;
    let err = parse_case(yaml, CaseFormat::Yaml).unwrap_err();
    match err {
        ProjectError::Validation(ValidationError::MissingField { field, .. }) => {
            assert_eq!(field, "average_pressure");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn gas_inflow_cannot_be_rate_paced() {
    let mut inflow = InflowDef::new(Phase::Gas, Regime::Steady);
    inflow.spacing.method = SpacingMethod::RateStep;
    let case = CaseFile {
        version: 2,
        name: "gas".to_string(),
        description: None,
        inflow: Some(inflow),
        outflow: None,
    };
    assert!(matches!(
        validate_case(&case),
        Err(ValidationError::Unsupported { .. })
    ));
}

#[test]
fn bare_roughness_needs_migration() {
    let yaml = r#"
version: 2
name: ambiguous
outflow:
  fluid: oil
  length: 8000
  diameter: 2.441
  roughness: 0.0006
  wellhead_pressure: 100
  density: 53
  viscosity: 2
"#;
    let err = parse_case(yaml, CaseFormat::Yaml).unwrap_err();
    assert!(err.to_string().contains("roughness"));
}

#[test]
fn bad_values_are_rejected() {
    let base = r#"
version: 2
name: bad
outflow:
  fluid: gas
  length: 8000
  diameter: 2.441
  wellhead_pressure: 500
  gas_gravity: 0.7
  surface_temperature: 80
  reservoir_temperature: 200
"#;
    assert!(parse_case(base, CaseFormat::Yaml).is_ok());
    assert!(parse_case(&format!("{base}  z_method: 7\n"), CaseFormat::Yaml).is_err());
    assert!(parse_case(&format!("{base}  segments: 0\n"), CaseFormat::Yaml).is_err());
    assert!(parse_case(&format!("{base}  inclination: 120\n"), CaseFormat::Yaml).is_err());
    assert!(parse_case(&format!("{base}  rate_hint: -5\n"), CaseFormat::Yaml).is_err());
    assert!(
        parse_case(
            &format!("{base}  composition: {{ n2: 0.6, co2: 0.6 }}\n"),
            CaseFormat::Yaml
        )
        .is_err()
    );
}

#[test]
fn composition_bounds_match_the_fluid_model() {
    let base = r#"
version: 2
name: sour
outflow:
  fluid: gas
  length: 8000
  diameter: 2.441
  wellhead_pressure: 500
  gas_gravity: 0.7
  surface_temperature: 80
  reservoir_temperature: 200
"#;
    for (n2, co2, h2s) in [
        (0.05, 0.1, 0.02),
        (0.0, 0.0, 0.999),
        (1.0, 0.0, 0.0),
        (0.0, 0.5, 0.5),
        (0.4, 0.3, 0.3),
    ] {
        let yaml = format!("{base}  composition: {{ n2: {n2}, co2: {co2}, h2s: {h2s} }}\n");
        let case_ok = parse_case(&yaml, CaseFormat::Yaml).is_ok();
        let fluid_ok = wp_fluids::GasComposition::new(n2, co2, h2s).is_ok();
        assert_eq!(case_ok, fluid_ok, "n2 {n2}, co2 {co2}, h2s {h2s}");
    }
    let pure_n2 = format!("{base}  composition: {{ n2: 1.0 }}\n");
    assert!(matches!(
        parse_case(&pure_n2, CaseFormat::Yaml).unwrap_err(),
        ProjectError::Validation(ValidationError::InvalidValue { .. })
    ));
}

#[test]
fn empty_case_is_rejected() {
    let err = parse_case("version: 2\nname: nothing\n", CaseFormat::Yaml).unwrap_err();
    assert!(matches!(
        err,
        ProjectError::Validation(ValidationError::MissingField { .. })
    ));
}

#[test]
fn future_version_is_rejected() {
    let yaml = "version: 9\nname: future\noutflow: { fluid: oil, length: 1, diameter: 1, \
                wellhead_pressure: 1, density: 1, viscosity: 1 }\n";
    let err = parse_case(yaml, CaseFormat::Yaml).unwrap_err();
    assert!(matches!(
        err,
        ProjectError::Validation(ValidationError::UnsupportedVersion { version: 9 })
    ));
}

#[test]
fn yaml_and_json_round_trip() {
    let case = wp_project::load_case(Path::new("../../cases/02_gas_well.yaml")).unwrap();
    let temp_dir = std::env::temp_dir();

    let yaml_path = temp_dir.join("wp_project_roundtrip.yaml");
    wp_project::save_case(&yaml_path, &case).unwrap();
    assert_eq!(wp_project::load_yaml(&yaml_path).unwrap(), case);

    let json_path = temp_dir.join("wp_project_roundtrip.json");
    wp_project::save_case(&json_path, &case).unwrap();
    assert_eq!(wp_project::load_json(&json_path).unwrap(), case);

    let _ = std::fs::remove_file(yaml_path);
    let _ = std::fs::remove_file(json_path);
}
