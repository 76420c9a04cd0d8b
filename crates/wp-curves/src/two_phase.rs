//! Two-phase (oil plus evolved gas) inflow at pseudosteady state.
//!
//! Below the bubble point the IPR bends according to the bowedness exponent
//! `a`: `a = 0` keeps the straight liquid line, `a = 0.8` gives the Vogel
//! shape and `a = 1` the Fetkovich quadratic. Above the bubble point an
//! undersaturated reservoir produces along the straight line until the
//! bottomhole pressure drops below the bubble point.

use crate::error::{CurveError, CurveResult};
use crate::inflow::{Drainage, Liquid, Reservoir, productivity_index};
use crate::spacing::RateInvertible;
use wp_core::numeric::{ensure_finite, ensure_positive};

/// Root acceptance slack around [0, 1].
const FRACTION_SLACK: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPhasePseudosteady {
    reservoir: Reservoir,
    liquid: Liquid,
    drainage: Drainage,
    average_pressure: f64,
    bubble_point: f64,
    bowedness: f64,
    productivity_index: f64,
}

impl TwoPhasePseudosteady {
    pub fn new(
        reservoir: Reservoir,
        liquid: Liquid,
        drainage: Drainage,
        average_pressure: f64,
        bubble_point: f64,
        bowedness: f64,
    ) -> CurveResult<Self> {
        ensure_positive(average_pressure, "average reservoir pressure")?;
        ensure_positive(bubble_point, "bubble point pressure")?;
        ensure_finite(bowedness, "bowedness")?;
        if !(0.0..=1.0).contains(&bowedness) {
            return Err(CurveError::InvalidArg {
                what: "bowedness must lie in [0, 1]",
            });
        }
        let productivity_index = productivity_index(&reservoir, &liquid, &drainage)?;
        Ok(Self {
            reservoir,
            liquid,
            drainage,
            average_pressure,
            bubble_point,
            bowedness,
            productivity_index,
        })
    }

    pub fn reservoir(&self) -> &Reservoir {
        &self.reservoir
    }

    pub fn liquid(&self) -> &Liquid {
        &self.liquid
    }

    pub fn drainage(&self) -> &Drainage {
        &self.drainage
    }

    pub fn average_pressure(&self) -> f64 {
        self.average_pressure
    }

    pub fn bubble_point(&self) -> f64 {
        self.bubble_point
    }

    pub fn bowedness(&self) -> f64 {
        self.bowedness
    }

    /// J [STB/d/psi] of the straight-line part.
    pub fn productivity_index(&self) -> f64 {
        self.productivity_index
    }

    /// Whether gas is already free in the reservoir.
    pub fn is_saturated(&self) -> bool {
        self.average_pressure <= self.bubble_point
    }

    /// Rate at which the bottomhole pressure reaches the bubble point; zero
    /// for a saturated reservoir.
    pub fn bubble_point_rate(&self) -> f64 {
        if self.is_saturated() {
            0.0
        } else {
            self.productivity_index * (self.average_pressure - self.bubble_point)
        }
    }

    /// The curved segment's starting pressure: p_avg when saturated, else pb.
    fn curve_base(&self) -> f64 {
        self.average_pressure.min(self.bubble_point)
    }

    /// Rate gained along the curved segment from its base down to zero.
    fn curve_span(&self) -> f64 {
        self.productivity_index * self.curve_base() / (1.0 + self.bowedness)
    }

    fn curved(&self, x: f64) -> f64 {
        let a = self.bowedness;
        self.curve_span() * (1.0 - (1.0 - a) * x - a * x * x)
    }

    pub fn rate_at(&self, pwf: f64) -> f64 {
        if self.is_saturated() {
            return self.curved(pwf / self.average_pressure);
        }
        if pwf >= self.bubble_point {
            self.productivity_index * (self.average_pressure - pwf)
        } else {
            self.bubble_point_rate() + self.curved(pwf / self.bubble_point)
        }
    }
}

impl RateInvertible for TwoPhasePseudosteady {
    fn max_rate(&self) -> f64 {
        self.rate_at(0.0)
    }

    fn pressure_at(&self, rate: f64) -> Option<f64> {
        let qb = self.bubble_point_rate();
        if !self.is_saturated() && rate <= qb {
            return Some(self.average_pressure - rate / self.productivity_index);
        }
        let x = curve_fraction(self.bowedness, (rate - qb) / self.curve_span())?;
        Some(x * self.curve_base())
    }
}

/// Solve `a·x² + (1 − a)·x + (r − 1) = 0` for the pressure fraction `x`
/// delivering the rate fraction `r` of the curved segment.
///
/// Only roots in [0, 1] are physical; when both qualify the larger is kept.
/// For bowedness in [0, 1] the vertex lies at x ≤ 0, so the smaller root is
/// never an interior solution and the tie-break only applies to `a > 1`,
/// which [`TwoPhasePseudosteady::new`] rejects.
pub fn curve_fraction(a: f64, r: f64) -> Option<f64> {
    if !r.is_finite() {
        return None;
    }
    let accept = |x: f64| (-FRACTION_SLACK..=1.0 + FRACTION_SLACK).contains(&x);

    if a.abs() < FRACTION_SLACK {
        let x = 1.0 - r;
        return accept(x).then(|| x.clamp(0.0, 1.0));
    }

    let b = 1.0 - a;
    let disc = b * b - 4.0 * a * (r - 1.0);
    if disc < -FRACTION_SLACK {
        return None;
    }
    let sq = disc.max(0.0).sqrt();
    [(-b + sq) / (2.0 * a), (-b - sq) / (2.0 * a)]
        .into_iter()
        .filter(|x| accept(*x))
        .map(|x| x.clamp(0.0, 1.0))
        .reduce(f64::max)
}
