//! Sample cases run end to end through the service layer.

use std::path::Path;
use wp_app::{AppError, run_case, run_case_file};

fn run(path: &str) -> wp_app::CaseReport {
    run_case_file(Path::new(path)).unwrap_or_else(|e| panic!("{path} should run: {e}"))
}

#[test]
fn oil_well_pseudosteady() {
    let report = run("../../cases/01_oil_well_pseudosteady.yaml");

    let ipr = report.inflow.expect("inflow curve");
    assert_eq!(ipr.points.len(), 25);
    assert_eq!(ipr.points[0].pressure, 3000.0);
    assert_eq!(ipr.points[0].rate, 0.0);
    let aof = ipr.max_rate.unwrap();
    assert_eq!(ipr.points.last().unwrap().rate, aof);

    let opr = report.outflow.expect("outflow curve");
    assert_eq!(opr.points.len(), 25);
    assert_eq!(opr.max_rate, Some((1.25 * aof).clamp(300.0, 20_000.0)));
    assert!((opr.points[0].pressure - (100.0 + 53.0 * 8000.0 / 144.0)).abs() < 1e-6);
}

#[test]
fn gas_well_chains_inflow_into_outflow() {
    let report = run("../../cases/02_gas_well.yaml");

    let ipr = report.inflow.unwrap();
    assert_eq!(ipr.points[0].rate, 0.0);
    assert_eq!(ipr.points.last().unwrap().pressure, 0.0);
    for pair in ipr.points.windows(2) {
        assert!(pair[1].rate > pair[0].rate);
    }

    let opr = report.outflow.unwrap();
    assert!(!opr.points.is_empty());
    for pair in opr.points.windows(2) {
        assert!(pair[1].pressure >= pair[0].pressure);
    }
}

#[test]
fn two_phase_rate_paced() {
    let report = run("../../cases/03_two_phase_vogel.yaml");
    let ipr = report.inflow.unwrap();
    assert_eq!(ipr.points[0].rate, 0.0);
    assert!((ipr.points[0].pressure - 3500.0).abs() < 1e-9);
    for pair in ipr.points.windows(2) {
        assert!((pair[1].rate - pair[0].rate) <= 100.0 + 1e-9);
    }

    let opr = report.outflow.unwrap();
    assert_eq!(opr.points[0].rate, 0.0);
    for pair in opr.points.windows(2) {
        assert!(pair[1].rate > pair[0].rate);
    }
}

#[test]
fn gas_transient_json_case() {
    let report = run("../../cases/04_gas_transient.json");
    assert!(report.outflow.is_none());
    let ipr = report.inflow.unwrap();
    assert_eq!(ipr.points.len(), 15);
    assert!(ipr.max_rate.unwrap() > 0.0);
}

#[test]
fn legacy_case_runs_after_migration() {
    let report = run("../../cases/05_legacy_roughness.yaml");
    assert!(report.inflow.is_some());
    assert!(report.outflow.is_some());
}

#[test]
fn unsupported_case_fails_validation() {
    let err = run_case_file(Path::new("../../cases/unsupported/two_phase_transient.yaml"))
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "{err}");
}

#[test]
fn explicit_hint_wins_over_inflow() {
    let mut case =
        wp_app::load_case(Path::new("../../cases/01_oil_well_pseudosteady.yaml")).unwrap();
    if let Some(outflow) = case.outflow.as_mut() {
        outflow.rate_hint = Some(4000.0);
    }
    let report = run_case(&case).unwrap();
    assert_eq!(report.outflow.unwrap().max_rate, Some(5000.0));
}

#[test]
fn report_serializes_to_json() {
    let report = run("../../cases/01_oil_well_pseudosteady.yaml");
    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["name"], "Oil well, pseudosteady inflow");
    assert_eq!(value["inflow"]["spacing"]["method"], "Number of Points");
    assert!(value["outflow"]["points"].as_array().unwrap().len() == 25);
}
