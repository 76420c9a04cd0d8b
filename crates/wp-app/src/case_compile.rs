//! Compilation of case definitions into typed curve models.
//!
//! Defaults left open by the schema (skin, z and viscosity correlations,
//! segment count) are resolved here, once.

use wp_curves::gas_outflow::DEFAULT_SEGMENTS;
use wp_curves::inflow::{Drainage, Liquid, Reservoir, Transient};
use wp_curves::{
    GasOutflow, GasPseudosteady, GasSteady, GasTransient, InflowModel, LiquidPseudosteady,
    LiquidSteady, LiquidTransient, OilOutflow, OutflowModel, Phase, Regime, TwoPhasePseudosteady,
};
use wp_flow::Conduit;
use wp_fluids::{GasComposition, GasProperties, ViscosityMethod};
use wp_project::schema::{CompositionDef, InflowDef, OutflowDef, OutflowFluid, ZMethodDef};

use crate::error::{AppError, AppResult};

fn require(def: &InflowDef, field: &'static str) -> AppResult<f64> {
    def.field(field).ok_or_else(|| {
        AppError::Compile(format!(
            "{} {} inflow requires '{}'",
            def.phase, def.regime, field
        ))
    })
}

fn require_opt(value: Option<f64>, field: &'static str, context: &str) -> AppResult<f64> {
    value.ok_or_else(|| AppError::Compile(format!("{context} requires '{field}'")))
}

/// Build gas properties from gravity plus optional composition and
/// correlation selectors.
pub fn gas_properties(
    gravity: f64,
    composition: Option<CompositionDef>,
    z_method: Option<ZMethodDef>,
    viscosity_method: Option<ViscosityMethod>,
) -> AppResult<GasProperties> {
    let composition = match composition {
        Some(c) => GasComposition::new(c.n2, c.co2, c.h2s)?,
        None => GasComposition::default(),
    };
    let z_method = match z_method {
        Some(def) => def
            .resolve()
            .ok_or_else(|| AppError::Compile(format!("unknown z-factor method {def:?}")))?,
        None => Default::default(),
    };
    Ok(GasProperties::with_composition(gravity, composition)?
        .with_z_method(z_method)
        .with_viscosity_method(viscosity_method.unwrap_or_default()))
}

pub fn compile_inflow(def: &InflowDef) -> AppResult<InflowModel> {
    let reservoir = Reservoir {
        permeability: require(def, "permeability")?,
        thickness: require(def, "thickness")?,
        skin: def.skin.unwrap_or(0.0),
    };

    let liquid = || -> AppResult<Liquid> {
        Ok(Liquid {
            viscosity: require(def, "viscosity")?,
            formation_volume_factor: require(def, "formation_volume_factor")?,
        })
    };
    let drainage = || -> AppResult<Drainage> {
        Ok(Drainage {
            drainage_radius: require(def, "drainage_radius")?,
            wellbore_radius: require(def, "wellbore_radius")?,
        })
    };
    let transient = || -> AppResult<Transient> {
        Ok(Transient {
            porosity: require(def, "porosity")?,
            total_compressibility: require(def, "total_compressibility")?,
            wellbore_radius: require(def, "wellbore_radius")?,
            time: require(def, "time")?,
        })
    };
    let gas = || -> AppResult<GasProperties> {
        gas_properties(
            require(def, "gas_gravity")?,
            def.composition,
            def.z_method,
            def.viscosity_method,
        )
    };

    let model = match (def.phase, def.regime) {
        (Phase::Liquid, Regime::Transient) => InflowModel::LiquidTransient(LiquidTransient::new(
            reservoir,
            liquid()?,
            transient()?,
            require(def, "initial_pressure")?,
        )?),
        (Phase::Liquid, Regime::Pseudosteady) => {
            InflowModel::LiquidPseudosteady(LiquidPseudosteady::new(
                reservoir,
                liquid()?,
                drainage()?,
                require(def, "average_pressure")?,
            )?)
        }
        (Phase::Liquid, Regime::Steady) => InflowModel::LiquidSteady(LiquidSteady::new(
            reservoir,
            liquid()?,
            drainage()?,
            require(def, "boundary_pressure")?,
        )?),
        (Phase::Gas, Regime::Transient) => InflowModel::GasTransient(GasTransient::new(
            reservoir,
            transient()?,
            gas()?,
            require(def, "temperature")?,
            require(def, "initial_pressure")?,
        )?),
        (Phase::Gas, Regime::Pseudosteady) => InflowModel::GasPseudosteady(GasPseudosteady::new(
            reservoir,
            drainage()?,
            gas()?,
            require(def, "temperature")?,
            require(def, "average_pressure")?,
        )?),
        (Phase::Gas, Regime::Steady) => InflowModel::GasSteady(GasSteady::new(
            reservoir,
            drainage()?,
            gas()?,
            require(def, "temperature")?,
            require(def, "boundary_pressure")?,
        )?),
        (Phase::TwoPhase, Regime::Pseudosteady) => {
            InflowModel::TwoPhasePseudosteady(TwoPhasePseudosteady::new(
                reservoir,
                liquid()?,
                drainage()?,
                require(def, "average_pressure")?,
                require(def, "bubble_point")?,
                require(def, "bowedness")?,
            )?)
        }
        (Phase::TwoPhase, regime) => {
            return Err(AppError::Unsupported {
                message: format!("two-phase {regime} inflow is not modelled"),
            });
        }
    };

    model.check_spacing(&def.spacing)?;
    Ok(model)
}

pub fn compile_outflow(def: &OutflowDef) -> AppResult<OutflowModel> {
    let conduit = Conduit::new(
        def.length,
        def.diameter,
        def.inclination,
        def.roughness.to_roughness(),
    )?;

    let model = match def.fluid {
        OutflowFluid::Oil => OutflowModel::Oil(OilOutflow::new(
            conduit,
            def.wellhead_pressure,
            require_opt(def.density, "density", "oil outflow")?,
            require_opt(def.viscosity, "viscosity", "oil outflow")?,
            def.friction_model,
        )?),
        OutflowFluid::Gas => {
            let gas = gas_properties(
                require_opt(def.gas_gravity, "gas_gravity", "gas outflow")?,
                def.composition,
                def.z_method,
                def.viscosity_method,
            )?;
            OutflowModel::Gas(GasOutflow::new(
                conduit,
                def.wellhead_pressure,
                gas,
                require_opt(def.surface_temperature, "surface_temperature", "gas outflow")?,
                require_opt(
                    def.reservoir_temperature,
                    "reservoir_temperature",
                    "gas outflow",
                )?,
                def.friction_model,
                def.segments.unwrap_or(DEFAULT_SEGMENTS),
            )?)
        }
    };
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wp_fluids::ZMethod;

    #[test]
    fn gas_defaults_resolved_once() {
        let gas = gas_properties(0.7, None, None, None).unwrap();
        assert_eq!(gas.z_method, ZMethod::DranchukAbouKassem);
        assert_eq!(gas.viscosity_method, ViscosityMethod::LeeGonzalezEakin);

        let gas = gas_properties(0.7, None, Some(ZMethodDef::Code(4)), None).unwrap();
        assert_eq!(gas.z_method, ZMethod::BeggsBrill);
        assert!(gas_properties(0.7, None, Some(ZMethodDef::Code(5)), None).is_err());
    }

    #[test]
    fn two_phase_outside_pseudosteady_is_unsupported() {
        let mut def = InflowDef::new(Phase::TwoPhase, Regime::Steady);
        def.permeability = Some(30.0);
        def.thickness = Some(40.0);
        let err = compile_inflow(&def).unwrap_err();
        assert!(matches!(err, AppError::Unsupported { .. }));
    }

    #[test]
    fn missing_field_reported_at_compile() {
        let mut def = InflowDef::new(Phase::Liquid, Regime::Steady);
        def.permeability = Some(10.0);
        def.thickness = Some(10.0);
        let err = compile_inflow(&def).unwrap_err();
        assert!(err.to_string().contains("viscosity"), "{err}");
    }
}
