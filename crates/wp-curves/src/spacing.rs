//! Curve spacing policy.
//!
//! Turns a method plus a value into the concrete sequence of evaluation
//! points. Pressure-paced curves start at a characteristic pressure and walk
//! down to zero; rate-paced curves start at zero and walk up to the model's
//! maximum rate, asking the model to invert each rate into a pressure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Samples used when a point count is missing or non-positive.
pub const DEFAULT_POINTS: usize = 25;

/// Pressure increment [psi] used when a pressure step is missing or non-positive.
pub const DEFAULT_PRESSURE_STEP: f64 = 100.0;

/// Rate increment used when a rate step is missing or non-positive.
pub const DEFAULT_RATE_STEP: f64 = 50.0;

/// Hard ceiling on samples per curve.
pub const MAX_SAMPLES: usize = 10_000;

/// How curve samples are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpacingMethod {
    #[default]
    #[serde(rename = "Number of Points")]
    PointCount,
    #[serde(rename = "Delta Pressure")]
    PressureStep,
    #[serde(rename = "Delta Flowrate")]
    RateStep,
}

impl SpacingMethod {
    pub const ALL: [SpacingMethod; 3] = [Self::PointCount, Self::PressureStep, Self::RateStep];

    pub fn name(self) -> &'static str {
        match self {
            Self::PointCount => "Number of Points",
            Self::PressureStep => "Delta Pressure",
            Self::RateStep => "Delta Flowrate",
        }
    }
}

impl fmt::Display for SpacingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpacingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match key.as_str() {
            "number of points" | "points" | "point count" => Ok(Self::PointCount),
            "delta pressure" | "pressure step" | "pressure" => Ok(Self::PressureStep),
            "delta flowrate" | "rate step" | "rate" | "flowrate" => Ok(Self::RateStep),
            _ => Err(format!("unknown spacing method '{s}'")),
        }
    }
}

/// Spacing method plus its value (count, Δp or Δq).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingSpec {
    pub method: SpacingMethod,
    /// Non-positive or missing values fall back to the method's default.
    #[serde(default)]
    pub value: f64,
}

impl Default for SpacingSpec {
    fn default() -> Self {
        Self::point_count(DEFAULT_POINTS as f64)
    }
}

/// Models whose curve can be paced by rate.
///
/// Each model owns its own inversion; nothing is centralized.
pub trait RateInvertible {
    /// Rate at zero bottomhole pressure.
    fn max_rate(&self) -> f64;

    /// Bottomhole pressure delivering `rate`, or `None` when no physical
    /// pressure does.
    fn pressure_at(&self, rate: f64) -> Option<f64>;
}

impl SpacingSpec {
    pub fn point_count(n: f64) -> Self {
        Self {
            method: SpacingMethod::PointCount,
            value: n,
        }
    }

    pub fn pressure_step(dp: f64) -> Self {
        Self {
            method: SpacingMethod::PressureStep,
            value: dp,
        }
    }

    pub fn rate_step(dq: f64) -> Self {
        Self {
            method: SpacingMethod::RateStep,
            value: dq,
        }
    }

    /// Sample count for `PointCount`, defaulted and capped.
    pub fn count(&self) -> usize {
        if !self.value.is_finite() || self.value <= 0.0 {
            return DEFAULT_POINTS;
        }
        (self.value.round() as usize).clamp(1, MAX_SAMPLES)
    }

    /// Step size for the step methods, defaulted when non-positive.
    pub fn step(&self) -> f64 {
        let default = match self.method {
            SpacingMethod::RateStep => DEFAULT_RATE_STEP,
            _ => DEFAULT_PRESSURE_STEP,
        };
        if self.value.is_finite() && self.value > 0.0 {
            self.value
        } else {
            default
        }
    }

    /// Pressures from `p_ref` down to zero.
    ///
    /// Only meaningful for `PointCount` and `PressureStep`.
    pub fn pressures_descending(&self, p_ref: f64) -> Vec<f64> {
        match self.method {
            SpacingMethod::PressureStep => stepped(p_ref, 0.0, self.step()),
            _ => evenly_spaced(p_ref, 0.0, self.count()),
        }
    }

    /// Rates from zero up to `q_max`.
    pub fn rates_ascending(&self, q_max: f64) -> Vec<f64> {
        match self.method {
            SpacingMethod::RateStep => stepped(0.0, q_max, self.step()),
            _ => evenly_spaced(0.0, q_max, self.count()),
        }
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive; `n = 1` yields
/// only `start`.
pub fn evenly_spaced(start: f64, end: f64, n: usize) -> Vec<f64> {
    let n = n.clamp(1, MAX_SAMPLES);
    if n == 1 {
        return vec![start];
    }

    let delta = (end - start) / (n - 1) as f64;
    let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * delta).collect();
    points[n - 1] = end;
    points
}

/// Values from `start` toward `end` in increments of `step`, with the last
/// sample clamped to exactly `end`.
pub fn stepped(start: f64, end: f64, step: f64) -> Vec<f64> {
    let span = end - start;
    if span == 0.0 || !span.is_finite() {
        return vec![start];
    }

    let delta = step.abs().copysign(span);
    let mut points = Vec::new();
    let mut i = 0usize;
    loop {
        let v = start + i as f64 * delta;
        if (v - start).abs() >= span.abs() {
            points.push(end);
            break;
        }
        if points.len() + 1 >= MAX_SAMPLES {
            tracing::debug!(start, end, step, "spacing truncated at sample cap");
            points.push(end);
            break;
        }
        points.push(v);
        i += 1;
    }
    points
}
