//! Case file schema definitions.
//!
//! Numeric fields are in field units: psia, °F, ft, in for diameters, mD,
//! cp, lbm/ft³, 1/psi, hours and bbl/STB.

use serde::{Deserialize, Serialize};
use wp_curves::{Phase, Regime, SpacingSpec};
use wp_flow::{FrictionModel, Roughness};
use wp_fluids::{ViscosityMethod, ZMethod};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflow: Option<InflowDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outflow: Option<OutflowDef>,
}

/// Reservoir inflow request. Which fields are required depends on the
/// phase and regime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InflowDef {
    pub phase: Phase,
    pub regime: Regime,
    #[serde(default)]
    pub spacing: SpacingSpec,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permeability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viscosity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation_volume_factor: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary_pressure: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drainage_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wellbore_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub porosity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_compressibility: Option<f64>,
    /// Elapsed producing time [h].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_gravity: Option<f64>,
    /// Reservoir temperature [°F].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<CompositionDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_method: Option<ZMethodDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viscosity_method: Option<ViscosityMethod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bubble_point: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowedness: Option<f64>,
}

impl InflowDef {
    /// An empty request for `phase`/`regime` with default spacing.
    pub fn new(phase: Phase, regime: Regime) -> Self {
        Self {
            phase,
            regime,
            spacing: SpacingSpec::default(),
            permeability: None,
            thickness: None,
            skin: None,
            viscosity: None,
            formation_volume_factor: None,
            initial_pressure: None,
            average_pressure: None,
            boundary_pressure: None,
            drainage_radius: None,
            wellbore_radius: None,
            porosity: None,
            total_compressibility: None,
            time: None,
            gas_gravity: None,
            temperature: None,
            composition: None,
            z_method: None,
            viscosity_method: None,
            bubble_point: None,
            bowedness: None,
        }
    }

    /// Look up a numeric field by its schema name.
    pub fn field(&self, name: &str) -> Option<f64> {
        match name {
            "permeability" => self.permeability,
            "thickness" => self.thickness,
            "skin" => self.skin,
            "viscosity" => self.viscosity,
            "formation_volume_factor" => self.formation_volume_factor,
            "initial_pressure" => self.initial_pressure,
            "average_pressure" => self.average_pressure,
            "boundary_pressure" => self.boundary_pressure,
            "drainage_radius" => self.drainage_radius,
            "wellbore_radius" => self.wellbore_radius,
            "porosity" => self.porosity,
            "total_compressibility" => self.total_compressibility,
            "time" => self.time,
            "gas_gravity" => self.gas_gravity,
            "temperature" => self.temperature,
            "bubble_point" => self.bubble_point,
            "bowedness" => self.bowedness,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutflowFluid {
    Oil,
    Gas,
}

/// Wellbore outflow request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutflowDef {
    pub fluid: OutflowFluid,
    /// Measured length [ft].
    pub length: f64,
    /// Internal diameter [in].
    pub diameter: f64,
    /// Inclination from horizontal [deg].
    #[serde(default = "default_inclination")]
    pub inclination: f64,
    #[serde(default)]
    pub roughness: RoughnessDef,
    pub wellhead_pressure: f64,
    #[serde(default)]
    pub friction_model: FrictionModel,
    #[serde(default)]
    pub spacing: SpacingSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_hint: Option<f64>,

    /// Oil density [lbm/ft³].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    /// Oil viscosity [cp].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viscosity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_gravity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservoir_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<CompositionDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_method: Option<ZMethodDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viscosity_method: Option<ViscosityMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<usize>,
}

fn default_inclination() -> f64 {
    90.0
}

/// Wall roughness as written in a case file.
///
/// Version 1 files carry a bare number; the loader rewrites it into an
/// explicit kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RoughnessDef {
    Absolute { absolute: f64 },
    Relative { relative: f64 },
    Raw(f64),
}

impl Default for RoughnessDef {
    fn default() -> Self {
        Self::Relative { relative: 0.0 }
    }
}

impl RoughnessDef {
    pub fn to_roughness(self) -> Roughness {
        match self {
            Self::Absolute { absolute } => Roughness::Absolute(absolute),
            Self::Relative { relative } => Roughness::Relative(relative),
            Self::Raw(v) => Roughness::from_raw(v),
        }
    }

    /// Explicit form of a bare value, using the magnitude rule.
    pub fn normalized(self) -> Self {
        match self.to_roughness() {
            Roughness::Absolute(absolute) => Self::Absolute { absolute },
            Roughness::Relative(relative) => Self::Relative { relative },
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Self::Absolute { absolute: v } | Self::Relative { relative: v } | Self::Raw(v) => v,
        }
    }
}

/// Z-factor method by integer code or by name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ZMethodDef {
    Code(u8),
    Name(ZMethod),
}

impl ZMethodDef {
    pub fn resolve(self) -> Option<ZMethod> {
        match self {
            Self::Code(code) => ZMethod::from_code(code),
            Self::Name(method) => Some(method),
        }
    }
}

/// Non-hydrocarbon mole fractions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CompositionDef {
    #[serde(default)]
    pub n2: f64,
    #[serde(default)]
    pub co2: f64,
    #[serde(default)]
    pub h2s: f64,
}
