//! Real-gas compressibility (z) factor correlations.

use crate::convergence::Convergence;
use crate::error::{FluidError, FluidResult};
use crate::z_table;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MAX_ITER: usize = 100;
const DENSITY_TOL: f64 = 1e-6;
const CUBIC_TOL: f64 = 1e-5;

/// Under-relaxation applied to the reduced-density substitution. Plain
/// substitution oscillates beyond Ppr ≈ 3 near Tpr = 1.2.
const RELAXATION: f64 = 0.2;

/// z-factor correlation selector.
///
/// Integer codes follow the order callers have always used:
/// 0 DAK, 1 DPR, 2 table, 3 Redlich-Kwong, 4 Beggs-Brill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZMethod {
    #[default]
    #[serde(rename = "Dranchuk-Abou-Kassem")]
    DranchukAbouKassem,
    #[serde(rename = "Dranchuk-Purvis-Robinson")]
    DranchukPurvisRobinson,
    #[serde(rename = "Standing-Katz Table")]
    StandingKatzTable,
    #[serde(rename = "Redlich-Kwong")]
    RedlichKwong,
    #[serde(rename = "Beggs-Brill")]
    BeggsBrill,
}

impl ZMethod {
    pub const ALL: [ZMethod; 5] = [
        ZMethod::DranchukAbouKassem,
        ZMethod::DranchukPurvisRobinson,
        ZMethod::StandingKatzTable,
        ZMethod::RedlichKwong,
        ZMethod::BeggsBrill,
    ];

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn code(self) -> u8 {
        match self {
            Self::DranchukAbouKassem => 0,
            Self::DranchukPurvisRobinson => 1,
            Self::StandingKatzTable => 2,
            Self::RedlichKwong => 3,
            Self::BeggsBrill => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::DranchukAbouKassem => "Dranchuk-Abou-Kassem",
            Self::DranchukPurvisRobinson => "Dranchuk-Purvis-Robinson",
            Self::StandingKatzTable => "Standing-Katz Table",
            Self::RedlichKwong => "Redlich-Kwong",
            Self::BeggsBrill => "Beggs-Brill",
        }
    }
}

impl fmt::Display for ZMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ZMethod {
    type Err = FluidError;

    /// Accepts an integer code or a correlation name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Self::from_code(code).ok_or_else(|| FluidError::UnknownSelector {
                kind: "z-factor method",
                value: trimmed.to_string(),
            });
        }
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FluidError::UnknownSelector {
                kind: "z-factor method",
                value: trimmed.to_string(),
            })
    }
}

/// z-factor at reduced pressure `ppr` and reduced temperature `tpr`.
///
/// Returns `Err(OutOfDomain)` for inputs outside the selected correlation's
/// range and `Ok(DidNotConverge)` when an iterative method hits its cap.
pub fn z_factor(method: ZMethod, ppr: f64, tpr: f64) -> FluidResult<Convergence<f64>> {
    if !ppr.is_finite() || !tpr.is_finite() {
        return Err(FluidError::NonPhysical {
            what: "reduced pressure/temperature must be finite",
        });
    }
    match method {
        ZMethod::DranchukAbouKassem => {
            check_domain(method, ppr, tpr, |p, t| p > 0.0 && p < 30.0 && t > 1.0 && t <= 3.0)?;
            Ok(iterate_reduced_density(ppr, tpr, dak_eos))
        }
        ZMethod::DranchukPurvisRobinson => {
            check_domain(method, ppr, tpr, |p, t| p > 0.0 && p < 15.0 && t > 1.0 && t <= 3.0)?;
            Ok(iterate_reduced_density(ppr, tpr, dpr_eos))
        }
        ZMethod::StandingKatzTable => {
            let value = z_table::interpolate(ppr, tpr).ok_or(FluidError::OutOfDomain {
                correlation: method.name(),
                ppr,
                tpr,
            })?;
            Ok(Convergence::Converged {
                value,
                iterations: 0,
            })
        }
        ZMethod::RedlichKwong => {
            check_domain(method, ppr, tpr, |p, t| p > 0.0 && t > 0.0)?;
            Ok(redlich_kwong(ppr, tpr))
        }
        ZMethod::BeggsBrill => {
            check_domain(method, ppr, tpr, |p, t| p > 0.0 && p < 15.0 && t > 1.15 && t <= 2.4)?;
            Ok(Convergence::Converged {
                value: beggs_brill(ppr, tpr),
                iterations: 0,
            })
        }
    }
}

fn check_domain(
    method: ZMethod,
    ppr: f64,
    tpr: f64,
    valid: impl Fn(f64, f64) -> bool,
) -> FluidResult<()> {
    if valid(ppr, tpr) {
        Ok(())
    } else {
        Err(FluidError::OutOfDomain {
            correlation: method.name(),
            ppr,
            tpr,
        })
    }
}

/// Successive substitution z → ρr = 0.27·Ppr/(z·Tpr) → z = eos(ρr, Tpr).
fn iterate_reduced_density(ppr: f64, tpr: f64, eos: fn(f64, f64) -> f64) -> Convergence<f64> {
    let mut z = 1.0;
    for iteration in 1..=MAX_ITER {
        let rho_r = 0.27 * ppr / (z * tpr);
        let z_next = eos(rho_r, tpr);
        if !z_next.is_finite() || z_next <= 0.0 {
            return Convergence::DidNotConverge {
                last: z,
                iterations: iteration,
            };
        }
        if (z_next - z).abs() < DENSITY_TOL {
            return Convergence::Converged {
                value: z_next,
                iterations: iteration,
            };
        }
        z += RELAXATION * (z_next - z);
    }
    Convergence::DidNotConverge {
        last: z,
        iterations: MAX_ITER,
    }
}

fn dak_eos(rho: f64, t: f64) -> f64 {
    const A: [f64; 11] = [
        0.3265, -1.0700, -0.5339, 0.01569, -0.05165, 0.5475, -0.7361, 0.1844, 0.1056, 0.6134,
        0.7210,
    ];
    let rho2 = rho * rho;
    let c1 = A[0] + A[1] / t + A[2] / t.powi(3) + A[3] / t.powi(4) + A[4] / t.powi(5);
    let c2 = A[5] + A[6] / t + A[7] / t.powi(2);
    let c3 = A[8] * (A[6] / t + A[7] / t.powi(2));
    let c4 = A[9] * (1.0 + A[10] * rho2) * (rho2 / t.powi(3)) * (-A[10] * rho2).exp();
    1.0 + c1 * rho + c2 * rho2 - c3 * rho.powi(5) + c4
}

fn dpr_eos(rho: f64, t: f64) -> f64 {
    const A: [f64; 8] = [
        0.31506237,
        -1.04670990,
        -0.57832729,
        0.53530771,
        -0.61232032,
        -0.10488813,
        0.68157001,
        0.68446549,
    ];
    let rho2 = rho * rho;
    1.0 + (A[0] + A[1] / t + A[2] / t.powi(3)) * rho
        + (A[3] + A[4] / t) * rho2
        + A[4] * A[5] * rho.powi(5) / t
        + A[6] * rho2 / t.powi(3) * (1.0 + A[7] * rho2) * (-A[7] * rho2).exp()
}

/// Newton-Raphson on Z³ − Z² + (A − B − B²)·Z − A·B = 0, starting from Z = 1.
fn redlich_kwong(ppr: f64, tpr: f64) -> Convergence<f64> {
    let a = 0.42748 * ppr / tpr.powf(2.5);
    let b = 0.08664 * ppr / tpr;
    let c = a - b - b * b;

    let mut z: f64 = 1.0;
    for iteration in 1..=MAX_ITER {
        let f = z.powi(3) - z.powi(2) + c * z - a * b;
        let df = 3.0 * z.powi(2) - 2.0 * z + c;
        if df == 0.0 || !df.is_finite() {
            return Convergence::DidNotConverge {
                last: z,
                iterations: iteration,
            };
        }
        let z_next = z - f / df;
        if (z_next - z).abs() < CUBIC_TOL {
            return Convergence::Converged {
                value: z_next,
                iterations: iteration,
            };
        }
        z = z_next;
    }
    Convergence::DidNotConverge {
        last: z,
        iterations: MAX_ITER,
    }
}

fn beggs_brill(ppr: f64, tpr: f64) -> f64 {
    let a = 1.39 * (tpr - 0.92).sqrt() - 0.36 * tpr - 0.101;
    let b = (0.62 - 0.23 * tpr) * ppr
        + (0.066 / (tpr - 0.86) - 0.037) * ppr.powi(2)
        + 0.32 * ppr.powi(6) / 10f64.powf(9.0 * (tpr - 1.0));
    let c = 0.132 - 0.32 * tpr.log10();
    let d = 10f64.powf(0.3106 - 0.49 * tpr + 0.1824 * tpr.powi(2));
    a + (1.0 - a) / b.exp() + c * ppr.powf(d)
}
