//! Single-phase gas outflow by segment marching.
//!
//! The conduit is split into equal segments and marched from the wellhead
//! down. Each segment evaluates the gas at its mid-temperature and at a
//! predicted mid-pressure, then adds Darcy-Weisbach friction and the
//! inclination-projected hydrostatic head. Work is done in SI.

use crate::error::{CurveError, CurveResult};
use tracing::warn;
use wp_core::numeric::{ensure_finite, ensure_positive};
use wp_core::units::constants::{M3_PER_FT3, P_SC_PSIA, R_SI, SECONDS_PER_DAY, T_SC_F, g0};
use wp_core::units::{
    cp, deg_f, fahrenheit_to_rankine, pa, psia, to_kelvin, to_pa, to_pa_s, to_psia,
};
use wp_flow::{Conduit, FrictionModel, fanning};
use wp_fluids::{Convergence, GasProperties};

/// Segments used when none are configured.
pub const DEFAULT_SEGMENTS: usize = 40;

/// Rate span [Mscf/d] used when no hint is given.
pub const DEFAULT_RATE_SPAN: f64 = 5000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasOutflow {
    conduit: Conduit,
    wellhead_pressure: f64,
    gas: GasProperties,
    surface_temperature: f64,
    reservoir_temperature: f64,
    friction: FrictionModel,
    segments: usize,
}

impl GasOutflow {
    /// Pressures in psia, temperatures in °F.
    pub fn new(
        conduit: Conduit,
        wellhead_pressure: f64,
        gas: GasProperties,
        surface_temperature: f64,
        reservoir_temperature: f64,
        friction: FrictionModel,
        segments: usize,
    ) -> CurveResult<Self> {
        ensure_positive(wellhead_pressure, "wellhead pressure")?;
        for (t, what) in [
            (surface_temperature, "surface temperature"),
            (reservoir_temperature, "reservoir temperature"),
        ] {
            ensure_finite(t, what)?;
            ensure_positive(fahrenheit_to_rankine(t), "absolute temperature")?;
        }
        if segments == 0 {
            return Err(CurveError::InvalidArg {
                what: "segment count must be at least 1",
            });
        }
        Ok(Self {
            conduit,
            wellhead_pressure,
            gas,
            surface_temperature,
            reservoir_temperature,
            friction,
            segments,
        })
    }

    pub fn conduit(&self) -> &Conduit {
        &self.conduit
    }

    pub fn gas(&self) -> &GasProperties {
        &self.gas
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Molar mass [kg/mol].
    fn molar_mass(&self) -> f64 {
        self.gas.molecular_weight() * 1e-3
    }

    /// Mass rate [kg/s] for a standard-condition rate [Mscf/d].
    pub fn mass_rate(&self, rate: f64) -> f64 {
        let t_sc = to_kelvin(deg_f(T_SC_F));
        let rho_sc = to_pa(psia(P_SC_PSIA)) * self.molar_mass() / (R_SI * t_sc);
        rate * 1000.0 * M3_PER_FT3 / SECONDS_PER_DAY * rho_sc
    }

    /// Temperature [°F] at the middle of segment `i`.
    fn segment_temperature(&self, i: usize) -> f64 {
        let frac = (i as f64 + 0.5) / self.segments as f64;
        self.surface_temperature + (self.reservoir_temperature - self.surface_temperature) * frac
    }

    /// Bottomhole pressure [psia] needed to flow `rate` [Mscf/d].
    ///
    /// `Ok(None)` if z fails to converge in any segment.
    pub fn bottomhole_pressure(&self, rate: f64) -> CurveResult<Option<f64>> {
        let dl = self.conduit.length_m() / self.segments as f64;
        let mdot = self.mass_rate(rate);
        let mut p = to_pa(psia(self.wellhead_pressure));

        for i in 0..self.segments {
            let t = self.segment_temperature(i);
            let Some(predicted) = self.pressure_gradient(p, t, mdot)? else {
                return Ok(None);
            };
            let Some(gradient) = self.pressure_gradient(p + 0.5 * predicted * dl, t, mdot)? else {
                return Ok(None);
            };
            p += gradient * dl;
        }

        let p = to_psia(pa(p));
        Ok(p.is_finite().then_some(p))
    }

    /// dp/dl [Pa/m] at pressure `p` [Pa], temperature `t` [°F] and mass rate
    /// `mdot` [kg/s].
    fn pressure_gradient(&self, p: f64, t: f64, mdot: f64) -> CurveResult<Option<f64>> {
        let p_psia = to_psia(pa(p));
        let state = match self.gas.evaluate(p_psia, t)? {
            Convergence::Converged { value, .. } => value,
            Convergence::DidNotConverge { iterations, .. } => {
                warn!(
                    pressure = p_psia,
                    temperature = t,
                    iterations,
                    "z did not converge; dropping rate point"
                );
                return Ok(None);
            }
        };

        let rho = p * self.molar_mass() / (state.z * R_SI * to_kelvin(deg_f(t)));
        let gravity = rho * g0().value * self.conduit.sin_inclination();
        if mdot <= 0.0 {
            return Ok(Some(gravity));
        }

        let d = self.conduit.diameter_m();
        let v = mdot / (rho * self.conduit.area_m2());
        let mu = to_pa_s(cp(state.viscosity));
        let re = rho * v * d / mu;
        let f = fanning(re, self.conduit.relative_roughness(), self.friction);
        let friction = 4.0 * f / d * rho * v * v / 2.0;

        let gradient = gravity + friction;
        Ok(gradient.is_finite().then_some(gradient))
    }
}
