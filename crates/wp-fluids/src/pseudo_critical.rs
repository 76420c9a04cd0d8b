//! Pseudo-critical and reduced properties of a natural gas.

use crate::error::{FluidError, FluidResult};
use serde::{Deserialize, Serialize};
use wp_core::numeric::{ensure_finite, ensure_positive};
use wp_core::units::{constants::MW_AIR, fahrenheit_to_rankine};

/// Non-hydrocarbon mole fractions.
///
/// The sweet-gas pseudo-critical correlation accepts these and ignores them;
/// only the Carr-Kobayashi-Burrows viscosity applies a correction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GasComposition {
    #[serde(default)]
    pub n2: f64,
    #[serde(default)]
    pub co2: f64,
    #[serde(default)]
    pub h2s: f64,
}

impl GasComposition {
    pub fn new(n2: f64, co2: f64, h2s: f64) -> FluidResult<Self> {
        for (value, what) in [(n2, "N2 fraction"), (co2, "CO2 fraction"), (h2s, "H2S fraction")] {
            ensure_finite(value, what)?;
            if !(0.0..1.0).contains(&value) {
                return Err(FluidError::NonPhysical { what });
            }
        }
        if n2 + co2 + h2s >= 1.0 {
            return Err(FluidError::NonPhysical {
                what: "non-hydrocarbon fractions sum to 1 or more",
            });
        }
        Ok(Self { n2, co2, h2s })
    }

    pub fn is_sweet(&self) -> bool {
        self.n2 == 0.0 && self.co2 == 0.0 && self.h2s == 0.0
    }
}

/// Pseudo-critical pressure [psia] and temperature [°R].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PseudoCritical {
    pub ppc: f64,
    pub tpc: f64,
}

impl PseudoCritical {
    /// Linear correlation in specific gravity (sweet, dry gas).
    pub fn from_gravity(gravity: f64, _composition: &GasComposition) -> FluidResult<Self> {
        let g = ensure_positive(gravity, "gas specific gravity")?;
        Ok(Self {
            ppc: 709.604 - 58.718 * g,
            tpc: 170.491 + 307.344 * g,
        })
    }

    /// Reduced state at `p` [psia] and `t` [°F].
    pub fn reduce(&self, p: f64, t: f64) -> Reduced {
        Reduced {
            ppr: p / self.ppc,
            tpr: fahrenheit_to_rankine(t) / self.tpc,
        }
    }
}

/// Reduced pressure and temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduced {
    pub ppr: f64,
    pub tpr: f64,
}

/// Apparent molecular weight [lbm/lbmol] of a gas of the given gravity.
#[inline]
pub fn molecular_weight(gravity: f64) -> f64 {
    MW_AIR * gravity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_critical_for_typical_gas() {
        let pc = PseudoCritical::from_gravity(0.7, &GasComposition::default()).unwrap();
        assert!((pc.ppc - 668.5014).abs() < 1e-4);
        assert!((pc.tpc - 385.6318).abs() < 1e-4);
    }

    #[test]
    fn contaminants_do_not_shift_pseudo_critical() {
        let sour = GasComposition::new(0.02, 0.05, 0.01).unwrap();
        let a = PseudoCritical::from_gravity(0.7, &sour).unwrap();
        let b = PseudoCritical::from_gravity(0.7, &GasComposition::default()).unwrap();
        assert_eq!(a, b);
        assert!(!sour.is_sweet());
    }

    #[test]
    fn reduce_uses_absolute_temperature() {
        let pc = PseudoCritical { ppc: 700.0, tpc: 400.0 };
        let r = pc.reduce(1400.0, 140.33);
        assert!((r.ppr - 2.0).abs() < 1e-12);
        assert!((r.tpr - 1.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(PseudoCritical::from_gravity(0.0, &GasComposition::default()).is_err());
        assert!(GasComposition::new(-0.1, 0.0, 0.0).is_err());
        assert!(GasComposition::new(0.5, 0.5, 0.0).is_err());
    }
}
