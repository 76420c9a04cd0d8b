//! Gas viscosity correlations.

use crate::error::{FluidError, FluidResult};
use crate::pseudo_critical::{GasComposition, Reduced};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wp_core::units::constants::LBM_FT3_PER_G_CC;

/// Gas viscosity correlation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViscosityMethod {
    #[default]
    #[serde(rename = "Lee-Gonzalez-Eakin")]
    LeeGonzalezEakin,
    #[serde(rename = "Lee-Gonzalez-Eakin Refit")]
    LeeGonzalezEakinRefit,
    #[serde(rename = "Lee-Gonzalez-Eakin 1966")]
    LeeGonzalezEakin1966,
    #[serde(rename = "Carr-Kobayashi-Burrows")]
    CarrKobayashiBurrows,
}

impl ViscosityMethod {
    pub const ALL: [ViscosityMethod; 4] = [
        ViscosityMethod::LeeGonzalezEakin,
        ViscosityMethod::LeeGonzalezEakinRefit,
        ViscosityMethod::LeeGonzalezEakin1966,
        ViscosityMethod::CarrKobayashiBurrows,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::LeeGonzalezEakin => "Lee-Gonzalez-Eakin",
            Self::LeeGonzalezEakinRefit => "Lee-Gonzalez-Eakin Refit",
            Self::LeeGonzalezEakin1966 => "Lee-Gonzalez-Eakin 1966",
            Self::CarrKobayashiBurrows => "Carr-Kobayashi-Burrows",
        }
    }
}

impl fmt::Display for ViscosityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ViscosityMethod {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FluidError::UnknownSelector {
                kind: "viscosity method",
                value: s.trim().to_string(),
            })
    }
}

/// Coefficients of μ = 1e-4·K·exp(X·ρ^Y) with
/// K = (k0 + k1·M)·T^1.5/(k2 + k3·M + T), X = x0 + x1/T + x2·M, Y = y0 − y1·X.
struct LeeCoefficients {
    k: [f64; 4],
    x: [f64; 3],
    y: [f64; 2],
}

const LGE: LeeCoefficients = LeeCoefficients {
    k: [9.4, 0.02, 209.0, 19.0],
    x: [3.5, 986.0, 0.01],
    y: [2.4, 0.2],
};

const LGE_REFIT: LeeCoefficients = LeeCoefficients {
    k: [9.379, 0.01607, 209.2, 19.26],
    x: [3.448, 986.4, 0.01009],
    y: [2.447, 0.2224],
};

const LGE_1966: LeeCoefficients = LeeCoefficients {
    k: [7.77, 0.0063, 122.4, 12.9],
    x: [2.57, 1914.5, 0.0095],
    y: [1.11, -0.04],
};

/// Dempsey's fit of the Carr-Kobayashi-Burrows μ/μ1 chart, grouped by
/// powers of Tpr (outer) and Ppr (inner).
const DEMPSEY: [[f64; 4]; 4] = [
    [-2.46211820, 2.97054714, -0.286264054, 0.00805420522],
    [2.80860949, -3.49803305, 0.360373020, -0.0104432413],
    [-0.793385684, 1.39643306, -0.149144925, 0.00441015512],
    [0.0839387178, -0.186408848, 0.0203367881, -0.000609579263],
];

/// Inputs shared by every viscosity correlation.
#[derive(Debug, Clone, Copy)]
pub struct ViscosityInputs<'a> {
    pub gravity: f64,
    pub molecular_weight: f64,
    /// Temperature [°F].
    pub temperature: f64,
    /// Gas density [lbm/ft³].
    pub density: f64,
    pub reduced: Reduced,
    pub composition: &'a GasComposition,
}

/// Gas viscosity [cp].
pub fn gas_viscosity(method: ViscosityMethod, inputs: &ViscosityInputs<'_>) -> FluidResult<f64> {
    let mu = match method {
        ViscosityMethod::LeeGonzalezEakin => lee_form(&LGE, inputs),
        ViscosityMethod::LeeGonzalezEakinRefit => lee_form(&LGE_REFIT, inputs),
        ViscosityMethod::LeeGonzalezEakin1966 => lee_form(&LGE_1966, inputs),
        ViscosityMethod::CarrKobayashiBurrows => carr_kobayashi_burrows(inputs),
    };
    if mu.is_finite() && mu > 0.0 {
        Ok(mu)
    } else {
        Err(FluidError::NonPhysical {
            what: "gas viscosity",
        })
    }
}

fn lee_form(c: &LeeCoefficients, inputs: &ViscosityInputs<'_>) -> f64 {
    let t = wp_core::units::fahrenheit_to_rankine(inputs.temperature);
    let m = inputs.molecular_weight;
    let rho = inputs.density / LBM_FT3_PER_G_CC;

    let k = (c.k[0] + c.k[1] * m) * t.powf(1.5) / (c.k[2] + c.k[3] * m + t);
    let x = c.x[0] + c.x[1] / t + c.x[2] * m;
    let y = c.y[0] - c.y[1] * x;
    1e-4 * k * (x * rho.powf(y)).exp()
}

fn carr_kobayashi_burrows(inputs: &ViscosityInputs<'_>) -> f64 {
    let g = inputs.gravity;
    let t = inputs.temperature;
    let log_g = g.log10();
    let comp = inputs.composition;

    let uncorrected = (1.709e-5 - 2.062e-6 * g) * t + 8.188e-3 - 6.15e-3 * log_g;
    let sour = comp.n2 * (8.48e-3 * log_g + 9.59e-3)
        + comp.co2 * (9.08e-3 * log_g + 6.24e-3)
        + comp.h2s * (8.49e-3 * log_g + 3.73e-3);
    let mu_atm = uncorrected + sour;

    let Reduced { ppr, tpr } = inputs.reduced;
    let ln_ratio: f64 = DEMPSEY
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let poly = row[0] + row[1] * ppr + row[2] * ppr.powi(2) + row[3] * ppr.powi(3);
            tpr.powi(i as i32) * poly
        })
        .sum();
    mu_atm * ln_ratio.exp() / tpr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pseudo_critical::PseudoCritical;

    fn inputs<'a>(p: f64, density: f64, comp: &'a GasComposition) -> ViscosityInputs<'a> {
        let pc = PseudoCritical::from_gravity(0.7, comp).unwrap();
        ViscosityInputs {
            gravity: 0.7,
            molecular_weight: 0.7 * 28.967,
            temperature: 200.0,
            density,
            reduced: pc.reduce(p, 200.0),
            composition: comp,
        }
    }

    #[test]
    fn lee_gonzalez_eakin_reference() {
        let comp = GasComposition::default();
        let mu = gas_viscosity(ViscosityMethod::LeeGonzalezEakin, &inputs(2000.0, 6.5908, &comp))
            .unwrap();
        assert!((mu - 0.01691).abs() < 2e-4, "mu = {mu}");
    }

    #[test]
    fn lee_variants_agree_closely() {
        let comp = GasComposition::default();
        let base = inputs(1000.0, 3.13, &comp);
        let a = gas_viscosity(ViscosityMethod::LeeGonzalezEakin, &base).unwrap();
        for method in [
            ViscosityMethod::LeeGonzalezEakinRefit,
            ViscosityMethod::LeeGonzalezEakin1966,
        ] {
            let b = gas_viscosity(method, &base).unwrap();
            assert!((a - b).abs() / a < 0.05, "{method}: {a} vs {b}");
        }
    }

    #[test]
    fn carr_kobayashi_burrows_reference() {
        let comp = GasComposition::default();
        let mu = gas_viscosity(
            ViscosityMethod::CarrKobayashiBurrows,
            &inputs(2000.0, 6.5908, &comp),
        )
        .unwrap();
        assert!((mu - 0.01630).abs() < 2e-4, "mu = {mu}");
    }

    #[test]
    fn sour_gas_correction_raises_viscosity() {
        let sweet = GasComposition::default();
        let sour = GasComposition::new(0.05, 0.05, 0.05).unwrap();
        let a = gas_viscosity(ViscosityMethod::CarrKobayashiBurrows, &inputs(1000.0, 3.13, &sweet))
            .unwrap();
        let b = gas_viscosity(ViscosityMethod::CarrKobayashiBurrows, &inputs(1000.0, 3.13, &sour))
            .unwrap();
        assert!(b > a);
    }

    #[test]
    fn viscosity_rises_with_density() {
        let comp = GasComposition::default();
        let low = gas_viscosity(ViscosityMethod::LeeGonzalezEakin, &inputs(500.0, 1.5, &comp))
            .unwrap();
        let high = gas_viscosity(ViscosityMethod::LeeGonzalezEakin, &inputs(3000.0, 9.8, &comp))
            .unwrap();
        assert!(high > low);
    }

    #[test]
    fn parses_names() {
        assert_eq!(
            "carr-kobayashi-burrows".parse::<ViscosityMethod>().unwrap(),
            ViscosityMethod::CarrKobayashiBurrows
        );
        assert!("sutton".parse::<ViscosityMethod>().is_err());
    }
}
