//! One-off property queries used by front ends.

use serde::Serialize;
use wp_core::numeric::{ensure_finite, ensure_positive};
use wp_flow::{FrictionModel, fanning};
use wp_fluids::{Convergence, GasProperties, ViscosityMethod, ZMethod};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
pub struct GasQuery {
    pub gravity: f64,
    /// [psia]
    pub pressure: f64,
    /// [°F]
    pub temperature: f64,
    pub z_method: ZMethod,
    pub viscosity_method: ViscosityMethod,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GasReport {
    pub ppr: f64,
    pub tpr: f64,
    pub z: f64,
    pub converged: bool,
    pub iterations: usize,
    /// [lbm/ft³]
    pub density: f64,
    /// [cp]
    pub viscosity: f64,
}

/// Evaluate z, density and viscosity at one state.
///
/// A z solve that hits its cap still reports the last iterate, flagged
/// as not converged.
pub fn evaluate_gas(query: &GasQuery) -> AppResult<GasReport> {
    ensure_positive(query.pressure, "pressure")?;
    ensure_finite(query.temperature, "temperature")?;

    let gas = GasProperties::new(query.gravity)?
        .with_z_method(query.z_method)
        .with_viscosity_method(query.viscosity_method);
    let outcome = gas.evaluate(query.pressure, query.temperature)?;
    let converged = outcome.is_converged();
    let iterations = outcome.iterations();
    let state = match outcome {
        Convergence::Converged { value, .. } => value,
        Convergence::DidNotConverge { last, .. } => last,
    };
    Ok(GasReport {
        ppr: state.reduced.ppr,
        tpr: state.reduced.tpr,
        z: state.z,
        converged,
        iterations,
        density: state.density,
        viscosity: state.viscosity,
    })
}

/// Fanning friction factor for a positive Reynolds number and a relative
/// roughness.
pub fn friction_factor(
    reynolds: f64,
    relative_roughness: f64,
    model: FrictionModel,
) -> AppResult<f64> {
    ensure_positive(reynolds, "Reynolds number")?;
    if !relative_roughness.is_finite() || !(0.0..0.5).contains(&relative_roughness) {
        return Err(AppError::InvalidInput(format!(
            "relative roughness {relative_roughness} must lie in [0, 0.5)"
        )));
    }
    Ok(fanning(reynolds, relative_roughness, model))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gas_query_reports_state() {
        let report = evaluate_gas(&GasQuery {
            gravity: 0.7,
            pressure: 2000.0,
            temperature: 200.0,
            z_method: ZMethod::DranchukAbouKassem,
            viscosity_method: ViscosityMethod::LeeGonzalezEakin,
        })
        .unwrap();
        assert!(report.converged);
        assert!((report.z - 0.8692).abs() < 2e-3);
        assert!((report.tpr - 659.67 / (170.491 + 307.344 * 0.7)).abs() < 1e-9);
    }

    #[test]
    fn gas_query_domain_error() {
        let err = evaluate_gas(&GasQuery {
            gravity: 0.7,
            pressure: 2000.0,
            temperature: -200.0,
            z_method: ZMethod::BeggsBrill,
            viscosity_method: ViscosityMethod::LeeGonzalezEakin,
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Fluid(_)));
    }

    #[test]
    fn friction_query() {
        let f = friction_factor(1000.0, 1e-4, FrictionModel::Chen).unwrap();
        assert!((f - 0.016).abs() < 1e-12);
        assert!(friction_factor(0.0, 1e-4, FrictionModel::Chen).is_err());
        assert!(friction_factor(1e5, 0.7, FrictionModel::Chen).is_err());
    }
}
