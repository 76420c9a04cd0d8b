//! Case validation logic.

use crate::schema::{
    CaseFile, CompositionDef, InflowDef, OutflowDef, OutflowFluid, RoughnessDef, ZMethodDef,
};
use wp_curves::{Phase, Regime, SpacingMethod};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Missing field: {field} ({context})")]
    MissingField { field: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported feature: {feature} - {reason}")]
    Unsupported { feature: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Fields every inflow request of a given phase needs.
fn phase_fields(phase: Phase) -> &'static [&'static str] {
    match phase {
        Phase::Liquid | Phase::TwoPhase => &[
            "permeability",
            "thickness",
            "viscosity",
            "formation_volume_factor",
        ],
        Phase::Gas => &["permeability", "thickness", "gas_gravity", "temperature"],
    }
}

/// Fields a regime adds on top of the phase fields.
fn regime_fields(regime: Regime) -> &'static [&'static str] {
    match regime {
        Regime::Transient => &[
            "initial_pressure",
            "porosity",
            "total_compressibility",
            "wellbore_radius",
            "time",
        ],
        Regime::Pseudosteady => &["average_pressure", "drainage_radius", "wellbore_radius"],
        Regime::Steady => &["boundary_pressure", "drainage_radius", "wellbore_radius"],
    }
}

/// Fields that must be strictly positive when present.
const POSITIVE_FIELDS: &[&str] = &[
    "permeability",
    "thickness",
    "viscosity",
    "formation_volume_factor",
    "initial_pressure",
    "average_pressure",
    "boundary_pressure",
    "drainage_radius",
    "wellbore_radius",
    "porosity",
    "total_compressibility",
    "time",
    "gas_gravity",
    "bubble_point",
];

pub fn validate_case(case: &CaseFile) -> Result<(), ValidationError> {
    if case.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    if case.name.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: "name".to_string(),
            context: "case".to_string(),
        });
    }

    if case.inflow.is_none() && case.outflow.is_none() {
        return Err(ValidationError::MissingField {
            field: "inflow or outflow".to_string(),
            context: format!("case '{}'", case.name),
        });
    }

    if let Some(inflow) = &case.inflow {
        validate_inflow(inflow)?;
    }
    if let Some(outflow) = &case.outflow {
        validate_outflow(outflow)?;
    }

    Ok(())
}

pub fn validate_inflow(inflow: &InflowDef) -> Result<(), ValidationError> {
    let context = format!("{} {} inflow", inflow.phase, inflow.regime);

    if inflow.phase == Phase::TwoPhase && inflow.regime != Regime::Pseudosteady {
        return Err(ValidationError::Unsupported {
            feature: context,
            reason: "two-phase inflow is only defined at pseudosteady state".to_string(),
        });
    }

    if inflow.phase == Phase::Gas && inflow.spacing.method == SpacingMethod::RateStep {
        return Err(ValidationError::Unsupported {
            feature: format!("{} spacing", SpacingMethod::RateStep),
            reason: "gas inflow cannot be paced by rate".to_string(),
        });
    }

    let mut required: Vec<&str> = phase_fields(inflow.phase)
        .iter()
        .chain(regime_fields(inflow.regime))
        .copied()
        .collect();
    if inflow.phase == Phase::TwoPhase {
        required.extend(["bubble_point", "bowedness"]);
    }
    for field in required {
        if inflow.field(field).is_none() {
            return Err(ValidationError::MissingField {
                field: field.to_string(),
                context: context.clone(),
            });
        }
    }

    for field in POSITIVE_FIELDS {
        if let Some(v) = inflow.field(field) {
            require_positive(field, v)?;
        }
    }
    for field in ["skin", "temperature", "bowedness"] {
        if let Some(v) = inflow.field(field) {
            require_finite(field, v)?;
        }
    }
    if let Some(phi) = inflow.porosity {
        if phi > 1.0 {
            return Err(invalid("porosity", phi, "must not exceed 1"));
        }
    }
    if let Some(a) = inflow.bowedness {
        if !(0.0..=1.0).contains(&a) {
            return Err(invalid("bowedness", a, "must lie in [0, 1]"));
        }
    }
    if let Some(t) = inflow.temperature {
        require_above_absolute_zero("temperature", t)?;
    }

    validate_z_method(inflow.z_method)?;
    validate_composition(inflow.composition)?;
    Ok(())
}

pub fn validate_outflow(outflow: &OutflowDef) -> Result<(), ValidationError> {
    require_positive("length", outflow.length)?;
    require_positive("diameter", outflow.diameter)?;
    require_positive("wellhead_pressure", outflow.wellhead_pressure)?;
    if !outflow.inclination.is_finite() || !(-90.0..=90.0).contains(&outflow.inclination) {
        return Err(invalid(
            "inclination",
            outflow.inclination,
            "must lie in [-90, 90] degrees",
        ));
    }

    match outflow.roughness {
        RoughnessDef::Raw(v) => {
            return Err(ValidationError::InvalidValue {
                field: "roughness".to_string(),
                value: v.to_string(),
                reason: "state whether roughness is absolute or relative".to_string(),
            });
        }
        r if !r.value().is_finite() || r.value() < 0.0 => {
            return Err(invalid("roughness", r.value(), "must be non-negative"));
        }
        _ => {}
    }

    if let Some(hint) = outflow.rate_hint {
        if !hint.is_finite() || hint < 0.0 {
            return Err(invalid("rate_hint", hint, "must be non-negative"));
        }
    }

    let context = match outflow.fluid {
        OutflowFluid::Oil => "oil outflow",
        OutflowFluid::Gas => "gas outflow",
    };
    let required: Vec<(&str, Option<f64>)> = match outflow.fluid {
        OutflowFluid::Oil => vec![("density", outflow.density), ("viscosity", outflow.viscosity)],
        OutflowFluid::Gas => vec![
            ("gas_gravity", outflow.gas_gravity),
            ("surface_temperature", outflow.surface_temperature),
            ("reservoir_temperature", outflow.reservoir_temperature),
        ],
    };
    for (field, value) in required {
        let Some(v) = value else {
            return Err(ValidationError::MissingField {
                field: field.to_string(),
                context: context.to_string(),
            });
        };
        if field.ends_with("temperature") {
            require_above_absolute_zero(field, v)?;
        } else {
            require_positive(field, v)?;
        }
    }

    if outflow.segments == Some(0) {
        return Err(invalid("segments", 0.0, "must be at least 1"));
    }

    validate_z_method(outflow.z_method)?;
    validate_composition(outflow.composition)?;
    Ok(())
}

fn validate_z_method(z_method: Option<ZMethodDef>) -> Result<(), ValidationError> {
    match z_method {
        Some(def @ ZMethodDef::Code(code)) if def.resolve().is_none() => {
            Err(invalid("z_method", code as f64, "codes run from 0 to 4"))
        }
        _ => Ok(()),
    }
}

fn validate_composition(composition: Option<CompositionDef>) -> Result<(), ValidationError> {
    let Some(c) = composition else {
        return Ok(());
    };
    for (field, v) in [("n2", c.n2), ("co2", c.co2), ("h2s", c.h2s)] {
        if !v.is_finite() || !(0.0..1.0).contains(&v) {
            return Err(invalid(field, v, "mole fraction must lie in [0, 1)"));
        }
    }
    let total = c.n2 + c.co2 + c.h2s;
    if total >= 1.0 {
        return Err(invalid("composition", total, "non-hydrocarbon fractions must sum below 1"));
    }
    Ok(())
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn require_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive"))
    }
}

fn require_above_absolute_zero(field: &str, value_f: f64) -> Result<(), ValidationError> {
    if value_f.is_finite() && value_f > -459.67 {
        Ok(())
    } else {
        Err(invalid(field, value_f, "must be above absolute zero"))
    }
}
