//! Fanning friction factor correlations.
//!
//! Every explicit correlation evaluates the Darcy factor and divides by 4.

use crate::error::FlowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reynolds number below which flow is treated as laminar.
pub const LAMINAR_REYNOLDS: f64 = 2100.0;

const COLEBROOK_ITERATIONS: usize = 25;
const COLEBROOK_SEED: f64 = 0.02;

/// Turbulent friction correlation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrictionModel {
    /// Implicit Colebrook-White, fixed-point iterated.
    #[default]
    #[serde(rename = "Colebrook-White")]
    ColebrookWhite,
    #[serde(rename = "Swamee-Jain")]
    SwameeJain,
    #[serde(rename = "Haaland")]
    Haaland,
    #[serde(rename = "Chen")]
    Chen,
    #[serde(rename = "Churchill")]
    Churchill,
}

impl FrictionModel {
    pub const ALL: [FrictionModel; 5] = [
        FrictionModel::ColebrookWhite,
        FrictionModel::SwameeJain,
        FrictionModel::Haaland,
        FrictionModel::Chen,
        FrictionModel::Churchill,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ColebrookWhite => "Colebrook-White",
            Self::SwameeJain => "Swamee-Jain",
            Self::Haaland => "Haaland",
            Self::Chen => "Chen",
            Self::Churchill => "Churchill",
        }
    }

    pub fn is_implicit(self) -> bool {
        matches!(self, Self::ColebrookWhite)
    }
}

impl fmt::Display for FrictionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FrictionModel {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FlowError::UnknownModel(s.trim().to_string()))
    }
}

/// Fanning friction factor for Reynolds number `re` and relative roughness
/// `rel` (ε/D, already dimensionless).
///
/// Below [`LAMINAR_REYNOLDS`] the laminar value 16/Re is returned for every
/// model.
pub fn fanning(re: f64, rel: f64, model: FrictionModel) -> f64 {
    if re < LAMINAR_REYNOLDS {
        return 16.0 / re;
    }
    let darcy = match model {
        FrictionModel::ColebrookWhite => colebrook_white(re, rel),
        FrictionModel::SwameeJain => 0.25 / (rel / 3.7 + 5.74 / re.powf(0.9)).log10().powi(2),
        FrictionModel::Haaland => {
            let inv_sqrt = -1.8 * ((rel / 3.7).powf(1.11) + 6.9 / re).log10();
            1.0 / inv_sqrt.powi(2)
        }
        FrictionModel::Chen => {
            let inner = rel.powf(1.1098) / 2.8257 + 5.8506 / re.powf(0.8981);
            let inv_sqrt = -2.0 * (rel / 3.7065 - 5.0452 / re * inner.log10()).log10();
            1.0 / inv_sqrt.powi(2)
        }
        FrictionModel::Churchill => {
            let a = (2.457 * (1.0 / ((7.0 / re).powf(0.9) + 0.27 * rel)).ln()).powi(16);
            let b = (37_530.0 / re).powi(16);
            8.0 * ((8.0 / re).powi(12) + (a + b).powf(-1.5)).powf(1.0 / 12.0)
        }
    };
    darcy / 4.0
}

/// Darcy factor from a fixed number of Colebrook-White substitutions. No
/// convergence test: 25 passes are enough across the turbulent range.
fn colebrook_white(re: f64, rel: f64) -> f64 {
    let mut f = COLEBROOK_SEED;
    for _ in 0..COLEBROOK_ITERATIONS {
        let rhs = -2.0 * (rel / 3.7 + 2.51 / (re * f.sqrt())).log10();
        f = 1.0 / (rhs * rhs);
    }
    f
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laminar_is_model_independent() {
        for model in FrictionModel::ALL {
            assert_eq!(fanning(1000.0, 0.001, model), 0.016);
        }
    }

    #[test]
    fn colebrook_reference_value() {
        // Moody chart: Re = 1e5, ε/D = 1e-4 → f_D ≈ 0.0185
        let f = fanning(1e5, 1e-4, FrictionModel::ColebrookWhite);
        assert!((4.0 * f - 0.01851).abs() < 2e-4, "f = {f}");
    }

    #[test]
    fn explicit_models_track_colebrook() {
        for &(re, rel) in &[(1e4, 0.0), (1e5, 1e-4), (1e6, 1e-3), (1e7, 0.01)] {
            let reference = fanning(re, rel, FrictionModel::ColebrookWhite);
            for model in FrictionModel::ALL {
                let f = fanning(re, rel, model);
                assert!(
                    (f - reference).abs() / reference < 0.03,
                    "{model} at Re={re}, rel={rel}: {f} vs {reference}"
                );
            }
        }
    }

    #[test]
    fn churchill_is_continuous_at_transition() {
        let laminar = 16.0 / LAMINAR_REYNOLDS;
        let turbulent = fanning(LAMINAR_REYNOLDS, 1e-4, FrictionModel::Churchill);
        assert!((turbulent - laminar).abs() / laminar < 0.02);
    }

    #[test]
    fn transition_jump_per_model() {
        // Turbulent over laminar factor at Re = 2100. Only Churchill blends
        // the two regimes; the others jump by roughly 60 %.
        let laminar = 16.0 / LAMINAR_REYNOLDS;
        let expected = [
            (FrictionModel::ColebrookWhite, 1.0e-4, 1.5998),
            (FrictionModel::ColebrookWhite, 1.0e-3, 1.6228),
            (FrictionModel::SwameeJain, 1.0e-4, 1.6509),
            (FrictionModel::SwameeJain, 1.0e-3, 1.6772),
            (FrictionModel::Haaland, 1.0e-4, 1.6436),
            (FrictionModel::Haaland, 1.0e-3, 1.6611),
            (FrictionModel::Chen, 1.0e-4, 1.5896),
            (FrictionModel::Chen, 1.0e-3, 1.6141),
            (FrictionModel::Churchill, 1.0e-4, 1.0076),
            (FrictionModel::Churchill, 1.0e-3, 1.0076),
        ];
        for (model, rel, ratio) in expected {
            let got = fanning(LAMINAR_REYNOLDS, rel, model) / laminar;
            assert!((got - ratio).abs() < 1e-3, "{model} at rel={rel}: {got} vs {ratio}");
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!(
            "colebrook-white".parse::<FrictionModel>().unwrap(),
            FrictionModel::ColebrookWhite
        );
        assert!(FrictionModel::ColebrookWhite.is_implicit());
        assert!(!FrictionModel::Chen.is_implicit());
        assert!("moody".parse::<FrictionModel>().is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn positive_and_decreasing_in_reynolds(
            log_re in 4.0_f64..7.5,
            rel in 0.0_f64..0.01,
            step in 1.05_f64..3.0,
        ) {
            let re = 10f64.powf(log_re);
            for model in FrictionModel::ALL {
                let f1 = fanning(re, rel, model);
                let f2 = fanning(re * step, rel, model);
                prop_assert!(f1 > 0.0 && f2 > 0.0);
                prop_assert!(f2 <= f1 * (1.0 + 1e-9), "{} not decreasing: {} -> {}", model, f1, f2);
            }
        }
    }
}
