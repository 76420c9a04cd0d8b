//! Curve generation for a whole case.

use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::info;
use wp_curves::{CurvePoint, InflowModel, Phase, SpacingSpec};
use wp_project::schema::{CaseFile, OutflowFluid};

use crate::case_compile::{compile_inflow, compile_outflow};
use crate::case_service;
use crate::error::{AppError, AppResult};

/// One generated curve.
#[derive(Debug, Clone, Serialize)]
pub struct CurveReport {
    /// e.g. "liquid pseudosteady inflow" or "gas outflow".
    pub kind: String,
    pub spacing: SpacingSpec,
    /// Absolute open flow for an inflow curve, sampled rate span for an
    /// outflow curve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rate: Option<f64>,
    pub points: Vec<CurvePoint>,
}

/// Everything computed for a case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflow: Option<CurveReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outflow: Option<CurveReport>,
    pub elapsed_s: f64,
}

impl CaseReport {
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report to `path`.
    pub fn write_json(&self, path: &Path) -> AppResult<()> {
        std::fs::write(path, self.to_json()?).map_err(|e| AppError::ReportWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Whether an inflow model's rate units match the outflow fluid.
fn shares_rate_units(inflow: &InflowModel, fluid: OutflowFluid) -> bool {
    matches!(
        (inflow.phase(), fluid),
        (Phase::Liquid | Phase::TwoPhase, OutflowFluid::Oil) | (Phase::Gas, OutflowFluid::Gas)
    )
}

/// Run every request in the case.
///
/// When the case holds both curves and no explicit rate hint is set, the
/// inflow maximum rate becomes the outflow hint.
pub fn run_case(case: &CaseFile) -> AppResult<CaseReport> {
    let started = Instant::now();
    case_service::validate_case(case)?;

    let mut ipr_max = None;
    let mut compiled_inflow = None;
    let inflow = match &case.inflow {
        Some(def) => {
            let kind = format!("{} {} inflow", def.phase, def.regime);
            let model = compile_inflow(def)?;
            let points = model.generate(&def.spacing)?;
            let max_rate = model.max_rate()?;
            info!(
                case = %case.name,
                model = %kind,
                points = points.len(),
                max_rate = ?max_rate,
                "inflow curve generated"
            );
            ipr_max = max_rate;
            compiled_inflow = Some(model);
            Some(CurveReport {
                kind,
                spacing: def.spacing,
                max_rate,
                points,
            })
        }
        None => None,
    };

    let outflow = match &case.outflow {
        Some(def) => {
            let model = compile_outflow(def)?;
            let chained = compiled_inflow
                .as_ref()
                .filter(|m| shares_rate_units(m, def.fluid))
                .and(ipr_max);
            let hint = def.rate_hint.or(chained);
            let points = model.generate(&def.spacing, hint)?;
            let span = model.rate_span(hint);
            info!(
                case = %case.name,
                model = model.label(),
                points = points.len(),
                span,
                "outflow curve generated"
            );
            Some(CurveReport {
                kind: format!("{} outflow", model.label()),
                spacing: def.spacing,
                max_rate: Some(span),
                points,
            })
        }
        None => None,
    };

    let elapsed_s = started.elapsed().as_secs_f64();
    info!(case = %case.name, elapsed_s, "case complete");
    Ok(CaseReport {
        name: case.name.clone(),
        inflow,
        outflow,
        elapsed_s,
    })
}

/// Load a case file and run it.
pub fn run_case_file(path: &Path) -> AppResult<CaseReport> {
    let case = case_service::load_case(path)?;
    run_case(&case)
}
