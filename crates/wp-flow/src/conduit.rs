//! Conduit (tubing/casing) geometry.

use crate::error::{FlowError, FlowResult};
use serde::{Deserialize, Serialize};
use wp_core::numeric::{ensure_non_negative, ensure_positive};
use wp_core::units::{Length, ft, inch, to_ft, to_m};

/// Raw roughness values at or below this are taken as already relative (ε/D).
pub const RELATIVE_ROUGHNESS_LIMIT: f64 = 0.01;

/// Pipe wall roughness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Roughness {
    /// Absolute roughness [in].
    Absolute(f64),
    /// Relative roughness ε/D.
    Relative(f64),
}

impl Roughness {
    /// Interpret a bare number the way form inputs have always been read:
    /// small values are relative, larger ones absolute inches.
    pub fn from_raw(value: f64) -> Self {
        if value <= RELATIVE_ROUGHNESS_LIMIT {
            Self::Relative(value)
        } else {
            Self::Absolute(value)
        }
    }

    fn value(self) -> f64 {
        match self {
            Self::Absolute(v) | Self::Relative(v) => v,
        }
    }
}

/// A straight conduit from the bottomhole to the wellhead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conduit {
    length: Length,
    diameter: Length,
    /// Inclination from horizontal [deg]; 90 is vertical.
    inclination_deg: f64,
    roughness: Roughness,
}

impl Conduit {
    /// `length` [ft], `diameter` [in], `inclination_deg` from horizontal.
    pub fn new(
        length: f64,
        diameter: f64,
        inclination_deg: f64,
        roughness: Roughness,
    ) -> FlowResult<Self> {
        ensure_positive(length, "conduit length")?;
        ensure_positive(diameter, "conduit diameter")?;
        ensure_non_negative(roughness.value(), "roughness")?;
        if !inclination_deg.is_finite() || !(-90.0..=90.0).contains(&inclination_deg) {
            return Err(FlowError::InvalidArg {
                what: "inclination must lie in [-90, 90] degrees",
            });
        }
        let conduit = Self {
            length: ft(length),
            diameter: inch(diameter),
            inclination_deg,
            roughness,
        };
        if conduit.relative_roughness() >= 0.5 {
            return Err(FlowError::NonPhysical {
                what: "roughness exceeds half the diameter",
            });
        }
        Ok(conduit)
    }

    /// Measured length [ft].
    pub fn length_ft(&self) -> f64 {
        to_ft(self.length)
    }

    pub fn length_m(&self) -> f64 {
        to_m(self.length)
    }

    /// Internal diameter [ft].
    pub fn diameter_ft(&self) -> f64 {
        to_ft(self.diameter)
    }

    pub fn diameter_m(&self) -> f64 {
        to_m(self.diameter)
    }

    /// Flow area [ft²].
    pub fn area_ft2(&self) -> f64 {
        std::f64::consts::PI * self.diameter_ft().powi(2) / 4.0
    }

    /// Flow area [m²].
    pub fn area_m2(&self) -> f64 {
        std::f64::consts::PI * self.diameter_m().powi(2) / 4.0
    }

    pub fn inclination_deg(&self) -> f64 {
        self.inclination_deg
    }

    /// sin of the inclination from horizontal; projects length onto depth.
    pub fn sin_inclination(&self) -> f64 {
        self.inclination_deg.to_radians().sin()
    }

    /// True vertical depth [ft].
    pub fn vertical_depth_ft(&self) -> f64 {
        self.length_ft() * self.sin_inclination()
    }

    pub fn roughness(&self) -> Roughness {
        self.roughness
    }

    /// ε/D.
    pub fn relative_roughness(&self) -> f64 {
        match self.roughness {
            Roughness::Relative(r) => r,
            Roughness::Absolute(eps_in) => eps_in / (self.diameter_ft() * 12.0),
        }
    }
}
