//! Curve output points.

use serde::{Deserialize, Serialize};

/// One (bottomhole pressure, rate) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Bottomhole flowing pressure [psia].
    pub pressure: f64,
    /// Rate [STB/d for liquid, Mscf/d for gas].
    pub rate: f64,
}

impl CurvePoint {
    /// A point only if both coordinates are finite and non-negative.
    pub fn checked(pressure: f64, rate: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if valid(pressure) && valid(rate) {
            Some(Self { pressure, rate })
        } else {
            tracing::debug!(pressure, rate, "dropping non-physical curve point");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_filters_non_physical() {
        assert!(CurvePoint::checked(100.0, 5.0).is_some());
        assert!(CurvePoint::checked(0.0, 0.0).is_some());
        assert!(CurvePoint::checked(f64::NAN, 5.0).is_none());
        assert!(CurvePoint::checked(100.0, f64::INFINITY).is_none());
        assert!(CurvePoint::checked(-1.0, 5.0).is_none());
        assert!(CurvePoint::checked(100.0, -5.0).is_none());
    }
}
