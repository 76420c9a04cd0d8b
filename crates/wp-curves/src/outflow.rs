//! Outflow performance (OPR) curves: bottomhole pressure required to lift a
//! rate through the conduit against a fixed wellhead pressure.

use crate::error::{CurveError, CurveResult};
use crate::gas_outflow::GasOutflow;
use crate::point::CurvePoint;
use crate::spacing::{SpacingMethod, SpacingSpec, stepped};
use rayon::prelude::*;
use tracing::debug;
use wp_core::numeric::ensure_positive;
use wp_core::units::constants::{FT3_PER_BBL, GC, SECONDS_PER_DAY};
use wp_flow::{Conduit, FrictionModel, fanning};

/// Lower bound of the sampled rate span.
pub const MIN_RATE_SPAN: f64 = 300.0;
/// Upper bound of the sampled rate span.
pub const MAX_RATE_SPAN: f64 = 20_000.0;
/// Headroom applied to a rate hint.
pub const HINT_FACTOR: f64 = 1.25;
/// Reynolds number that sets the oil span when no hint is given.
pub const SPAN_REYNOLDS: f64 = 1.0e5;

/// Field-unit Reynolds constant for ρ [lbm/ft³], v [ft/s], D [ft], μ [cp].
const REYNOLDS_FIELD: f64 = 1488.0;

/// `1.25 × hint` for a positive hint, else `fallback`, clamped to the span
/// bounds.
pub fn rate_span(hint: Option<f64>, fallback: f64) -> f64 {
    let raw = match hint {
        Some(h) if h.is_finite() && h > 0.0 => HINT_FACTOR * h,
        _ => fallback,
    };
    raw.clamp(MIN_RATE_SPAN, MAX_RATE_SPAN)
}

/// Single-phase oil lifted through a conduit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OilOutflow {
    conduit: Conduit,
    wellhead_pressure: f64,
    density: f64,
    viscosity: f64,
    friction: FrictionModel,
}

impl OilOutflow {
    /// `wellhead_pressure` [psia], `density` [lbm/ft³], `viscosity` [cp].
    pub fn new(
        conduit: Conduit,
        wellhead_pressure: f64,
        density: f64,
        viscosity: f64,
        friction: FrictionModel,
    ) -> CurveResult<Self> {
        ensure_positive(wellhead_pressure, "wellhead pressure")?;
        ensure_positive(density, "oil density")?;
        ensure_positive(viscosity, "oil viscosity")?;
        Ok(Self {
            conduit,
            wellhead_pressure,
            density,
            viscosity,
            friction,
        })
    }

    pub fn conduit(&self) -> &Conduit {
        &self.conduit
    }

    /// Mean velocity [ft/s] at `rate` [STB/d].
    pub fn velocity(&self, rate: f64) -> f64 {
        rate * FT3_PER_BBL / SECONDS_PER_DAY / self.conduit.area_ft2()
    }

    pub fn reynolds(&self, rate: f64) -> f64 {
        REYNOLDS_FIELD * self.density * self.velocity(rate) * self.conduit.diameter_ft()
            / self.viscosity
    }

    /// Hydrostatic head [psi] of the liquid column.
    pub fn hydrostatic(&self) -> f64 {
        self.density * self.conduit.vertical_depth_ft() / 144.0
    }

    /// Fanning friction loss [psi] at `rate`.
    pub fn friction_loss(&self, rate: f64) -> f64 {
        if rate <= 0.0 {
            return 0.0;
        }
        let v = self.velocity(rate);
        let f = fanning(
            self.reynolds(rate),
            self.conduit.relative_roughness(),
            self.friction,
        );
        2.0 * f * self.density * v * v * self.conduit.length_ft()
            / (GC * self.conduit.diameter_ft())
            / 144.0
    }

    /// Bottomhole pressure [psia] required at `rate` [STB/d].
    pub fn bottomhole_pressure(&self, rate: f64) -> f64 {
        self.wellhead_pressure + self.hydrostatic() + self.friction_loss(rate)
    }

    /// Rate [STB/d] at which the flow reaches the span Reynolds number.
    pub fn reference_rate(&self) -> f64 {
        let v = SPAN_REYNOLDS * self.viscosity
            / (REYNOLDS_FIELD * self.density * self.conduit.diameter_ft());
        v * self.conduit.area_ft2() * SECONDS_PER_DAY / FT3_PER_BBL
    }
}

/// Every supported outflow model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutflowModel {
    Oil(OilOutflow),
    Gas(GasOutflow),
}

impl OutflowModel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Oil(_) => "oil",
            Self::Gas(_) => "gas",
        }
    }

    /// Reject a hint that is present but meaningless.
    pub fn check_hint(hint: Option<f64>) -> CurveResult<()> {
        match hint {
            Some(h) if !h.is_finite() || h < 0.0 => Err(CurveError::InvalidArg {
                what: "rate hint must be finite and non-negative",
            }),
            _ => Ok(()),
        }
    }

    /// Upper end of the sampled rate range.
    pub fn rate_span(&self, hint: Option<f64>) -> f64 {
        match self {
            Self::Oil(m) => rate_span(hint, m.reference_rate()),
            Self::Gas(_) => rate_span(hint, crate::gas_outflow::DEFAULT_RATE_SPAN),
        }
    }

    /// Bottomhole pressure at `rate`; `Ok(None)` when the sample cannot be
    /// evaluated.
    pub fn bottomhole_pressure(&self, rate: f64) -> CurveResult<Option<f64>> {
        match self {
            Self::Oil(m) => {
                let p = m.bottomhole_pressure(rate);
                Ok(p.is_finite().then_some(p))
            }
            Self::Gas(m) => m.bottomhole_pressure(rate),
        }
    }

    /// Generate the OPR.
    ///
    /// Rate-paced and point-count curves sample rate over `[0, span]`;
    /// pressure-paced curves walk bottomhole pressure up from its zero-rate
    /// value and invert each pressure into a rate.
    pub fn generate(
        &self,
        spacing: &SpacingSpec,
        hint: Option<f64>,
    ) -> CurveResult<Vec<CurvePoint>> {
        Self::check_hint(hint)?;
        let span = self.rate_span(hint);
        debug!(model = self.label(), span, method = %spacing.method, "generating outflow curve");

        match spacing.method {
            SpacingMethod::PointCount | SpacingMethod::RateStep => {
                self.sample(spacing.rates_ascending(span), |q| {
                    Ok(self
                        .bottomhole_pressure(q)?
                        .and_then(|p| CurvePoint::checked(p, q)))
                })
            }
            SpacingMethod::PressureStep => {
                let (Some(p0), Some(p1)) = (
                    self.bottomhole_pressure(0.0)?,
                    self.bottomhole_pressure(span)?,
                ) else {
                    return Ok(Vec::new());
                };
                self.sample(stepped(p0, p1, spacing.step()), |p| {
                    Ok(self
                        .rate_for_pressure(p, (p0, p1), span)?
                        .and_then(|q| CurvePoint::checked(p, q)))
                })
            }
        }
    }

    /// Evaluate independent samples; gas samples run in parallel.
    fn sample<F>(&self, xs: Vec<f64>, f: F) -> CurveResult<Vec<CurvePoint>>
    where
        F: Fn(f64) -> CurveResult<Option<CurvePoint>> + Sync + Send,
    {
        let points: Vec<Option<CurvePoint>> = match self {
            Self::Oil(_) => xs.into_iter().map(f).collect::<CurveResult<_>>()?,
            Self::Gas(_) => xs.into_par_iter().map(f).collect::<CurveResult<_>>()?,
        };
        Ok(points.into_iter().flatten().collect())
    }

    /// Invert p(q) by bisection on `[0, span]`; p is non-decreasing in q.
    fn rate_for_pressure(
        &self,
        target: f64,
        (p_low, p_high): (f64, f64),
        span: f64,
    ) -> CurveResult<Option<f64>> {
        const MAX_ITER: usize = 60;
        const TOL: f64 = 1e-9;

        if target <= p_low {
            return Ok(Some(0.0));
        }
        if target >= p_high {
            return Ok(Some(span));
        }

        let (mut q_low, mut q_high) = (0.0, span);
        for _ in 0..MAX_ITER {
            let q_mid = 0.5 * (q_low + q_high);
            let Some(p_mid) = self.bottomhole_pressure(q_mid)? else {
                return Ok(None);
            };
            if p_mid < target {
                q_low = q_mid;
            } else {
                q_high = q_mid;
            }
            if q_high - q_low < TOL * span {
                break;
            }
        }
        Ok(Some(0.5 * (q_low + q_high)))
    }
}

impl From<OilOutflow> for OutflowModel {
    fn from(m: OilOutflow) -> Self {
        Self::Oil(m)
    }
}

impl From<GasOutflow> for OutflowModel {
    fn from(m: GasOutflow) -> Self {
        Self::Gas(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wp_flow::Roughness;

    fn tubing() -> Conduit {
        Conduit::new(8000.0, 2.441, 90.0, Roughness::Relative(0.0006 / 2.441)).unwrap()
    }

    fn oil() -> OilOutflow {
        OilOutflow::new(tubing(), 100.0, 53.0, 2.0, FrictionModel::ColebrookWhite).unwrap()
    }

    #[test]
    fn static_column_at_zero_rate() {
        let p = oil().bottomhole_pressure(0.0);
        assert!((p - (100.0 + 53.0 * 8000.0 / 144.0)).abs() < 1e-9);
    }

    #[test]
    fn friction_raises_pressure_with_rate() {
        let m = oil();
        let expected = [
            (100.0, 3044.8),
            (500.0, 3051.89),
            (1000.0, 3069.46),
            (3000.0, 3221.8),
        ];
        for (q, p) in expected {
            let got = m.bottomhole_pressure(q);
            assert!((got - p).abs() < 0.05, "q {q}: {got} vs {p}");
        }
    }

    #[test]
    fn span_from_reference_reynolds() {
        let m = oil();
        assert!((m.reference_rate() - 6234.8).abs() < 1.0);
        assert!((m.reynolds(m.reference_rate()) - SPAN_REYNOLDS).abs() < 1e-6);
        let model = OutflowModel::Oil(m);
        assert!((model.rate_span(None) - m.reference_rate()).abs() < 1e-9);
        assert_eq!(model.rate_span(Some(1000.0)), 1250.0);
    }

    #[test]
    fn span_is_clamped() {
        assert_eq!(rate_span(Some(100.0), 5000.0), MIN_RATE_SPAN);
        assert_eq!(rate_span(Some(1e6), 5000.0), MAX_RATE_SPAN);
        assert_eq!(rate_span(Some(0.0), 5000.0), 5000.0);
        assert_eq!(rate_span(None, 10.0), MIN_RATE_SPAN);
    }

    #[test]
    fn point_count_samples_rate() {
        let model = OutflowModel::Oil(oil());
        let curve = model
            .generate(&SpacingSpec::point_count(5.0), Some(2000.0))
            .unwrap();
        let rates: Vec<f64> = curve.iter().map(|p| p.rate).collect();
        assert_eq!(rates, vec![0.0, 625.0, 1250.0, 1875.0, 2500.0]);
        for pair in curve.windows(2) {
            assert!(pair[1].pressure > pair[0].pressure);
        }
    }

    #[test]
    fn pressure_step_inverts_by_bisection() {
        let model = OutflowModel::Oil(oil());
        let curve = model
            .generate(&SpacingSpec::pressure_step(25.0), Some(2400.0))
            .unwrap();
        let p0 = oil().bottomhole_pressure(0.0);
        assert_eq!(curve[0].rate, 0.0);
        assert!((curve[0].pressure - p0).abs() < 1e-9);
        assert_eq!(curve.last().unwrap().rate, 3000.0);
        for point in &curve[1..curve.len() - 1] {
            let back = oil().bottomhole_pressure(point.rate);
            assert!((back - point.pressure).abs() < 1e-3);
        }
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(OilOutflow::new(tubing(), 0.0, 53.0, 2.0, FrictionModel::Haaland).is_err());
        assert!(OilOutflow::new(tubing(), 100.0, -1.0, 2.0, FrictionModel::Haaland).is_err());
        assert!(OutflowModel::check_hint(Some(f64::NAN)).is_err());
        assert!(OutflowModel::check_hint(None).is_ok());
    }
}
