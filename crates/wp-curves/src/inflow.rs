//! Inflow performance (IPR) models.
//!
//! One explicit struct per supported (phase, regime) pair, each validated at
//! construction, wrapped in [`InflowModel`] for dispatch. Liquid rates are in
//! STB/d, gas rates in Mscf/d.

use crate::error::{CurveError, CurveResult};
use crate::point::CurvePoint;
use crate::spacing::{RateInvertible, SpacingMethod, SpacingSpec};
use crate::two_phase::TwoPhasePseudosteady;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use wp_core::numeric::{ensure_finite, ensure_positive};
use wp_core::units::fahrenheit_to_rankine;
use wp_fluids::{Convergence, GasProperties, GasState};

/// Darcy-unit constant of the radial liquid equations.
const LIQUID_RADIAL: f64 = 141.2;
/// Darcy-unit constant of the liquid line-source solution.
const LIQUID_TRANSIENT: f64 = 162.6;
/// Pressure-squared constant for radial gas flow.
const GAS_RADIAL: f64 = 1422.0;
/// Pressure-squared constant of the gas line-source solution.
const GAS_TRANSIENT: f64 = 1638.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Liquid,
    Gas,
    TwoPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    Transient,
    Pseudosteady,
    Steady,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Liquid => "liquid",
            Self::Gas => "gas",
            Self::TwoPhase => "two-phase",
        })
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Transient => "transient",
            Self::Pseudosteady => "pseudosteady",
            Self::Steady => "steady",
        })
    }
}

/// Formation flow capacity and completion damage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reservoir {
    /// Permeability [mD].
    pub permeability: f64,
    /// Net pay thickness [ft].
    pub thickness: f64,
    /// Skin factor; negative for stimulated wells.
    pub skin: f64,
}

impl Reservoir {
    fn validate(&self) -> CurveResult<()> {
        ensure_positive(self.permeability, "permeability")?;
        ensure_positive(self.thickness, "thickness")?;
        ensure_finite(self.skin, "skin")?;
        Ok(())
    }

    /// k·h [mD·ft].
    pub fn flow_capacity(&self) -> f64 {
        self.permeability * self.thickness
    }
}

/// Oil properties for the liquid models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Liquid {
    /// Viscosity [cp].
    pub viscosity: f64,
    /// Formation volume factor [bbl/STB].
    pub formation_volume_factor: f64,
}

impl Liquid {
    fn validate(&self) -> CurveResult<()> {
        ensure_positive(self.viscosity, "liquid viscosity")?;
        ensure_positive(self.formation_volume_factor, "formation volume factor")?;
        Ok(())
    }
}

/// Radial drainage geometry [ft].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drainage {
    pub drainage_radius: f64,
    pub wellbore_radius: f64,
}

impl Drainage {
    fn validate(&self) -> CurveResult<()> {
        ensure_positive(self.drainage_radius, "drainage radius")?;
        ensure_positive(self.wellbore_radius, "wellbore radius")?;
        Ok(())
    }

    /// ln(re/rw) − 0.75 + s, required positive.
    pub(crate) fn pseudosteady_term(&self, skin: f64) -> CurveResult<f64> {
        self.validate()?;
        positive_denominator(
            (self.drainage_radius / self.wellbore_radius).ln() - 0.75 + skin,
            "ln(re/rw) - 0.75 + s",
        )
    }

    /// ln(re/rw) + s, required positive.
    fn steady_term(&self, skin: f64) -> CurveResult<f64> {
        self.validate()?;
        positive_denominator(
            (self.drainage_radius / self.wellbore_radius).ln() + skin,
            "ln(re/rw) + s",
        )
    }
}

/// Line-source inputs for infinite-acting flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transient {
    pub porosity: f64,
    /// Total compressibility [1/psi].
    pub total_compressibility: f64,
    /// Wellbore radius [ft].
    pub wellbore_radius: f64,
    /// Elapsed producing time [h].
    pub time: f64,
}

impl Transient {
    fn validate(&self) -> CurveResult<()> {
        ensure_positive(self.porosity, "porosity")?;
        ensure_positive(self.total_compressibility, "total compressibility")?;
        ensure_positive(self.wellbore_radius, "wellbore radius")?;
        ensure_positive(self.time, "elapsed time")?;
        if self.porosity > 1.0 {
            return Err(CurveError::InvalidArg {
                what: "porosity must not exceed 1",
            });
        }
        Ok(())
    }

    /// log10(t) + log10(k/(φ·μ·ct·rw²)) − 3.23 + 0.87·s.
    fn log_time_term(&self, permeability: f64, viscosity: f64, skin: f64) -> f64 {
        self.time.log10()
            + (permeability
                / (self.porosity
                    * viscosity
                    * self.total_compressibility
                    * self.wellbore_radius.powi(2)))
            .log10()
            - 3.23
            + 0.87 * skin
    }
}

fn positive_denominator(value: f64, what: &'static str) -> CurveResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CurveError::DegenerateDenominator { what, value })
    }
}

/// Pressure for a linear inflow `q = c·(p_ref − p_wf)`.
fn linear_pressure(reference_pressure: f64, coefficient: f64, rate: f64) -> Option<f64> {
    let p = reference_pressure - rate / coefficient;
    (p.is_finite() && p >= -1e-9 * reference_pressure).then(|| p.max(0.0))
}

/// Infinite-acting liquid inflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidTransient {
    reservoir: Reservoir,
    liquid: Liquid,
    transient: Transient,
    initial_pressure: f64,
    coefficient: f64,
}

impl LiquidTransient {
    pub fn new(
        reservoir: Reservoir,
        liquid: Liquid,
        transient: Transient,
        initial_pressure: f64,
    ) -> CurveResult<Self> {
        reservoir.validate()?;
        liquid.validate()?;
        transient.validate()?;
        ensure_positive(initial_pressure, "initial pressure")?;
        let term = positive_denominator(
            transient.log_time_term(reservoir.permeability, liquid.viscosity, reservoir.skin),
            "transient log-time term",
        )?;
        let coefficient = reservoir.flow_capacity()
            / (LIQUID_TRANSIENT * liquid.formation_volume_factor * liquid.viscosity * term);
        Ok(Self {
            reservoir,
            liquid,
            transient,
            initial_pressure,
            coefficient,
        })
    }

    pub fn reservoir(&self) -> &Reservoir {
        &self.reservoir
    }

    pub fn liquid(&self) -> &Liquid {
        &self.liquid
    }

    pub fn transient(&self) -> &Transient {
        &self.transient
    }

    /// Rate per psi of drawdown [STB/d/psi] at the configured time.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    pub fn rate_at(&self, pwf: f64) -> f64 {
        self.coefficient * (self.initial_pressure - pwf)
    }
}

impl RateInvertible for LiquidTransient {
    fn max_rate(&self) -> f64 {
        self.rate_at(0.0)
    }

    fn pressure_at(&self, rate: f64) -> Option<f64> {
        linear_pressure(self.initial_pressure, self.coefficient, rate)
    }
}

/// Bounded liquid inflow at pseudosteady state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidPseudosteady {
    reservoir: Reservoir,
    liquid: Liquid,
    drainage: Drainage,
    average_pressure: f64,
    productivity_index: f64,
}

impl LiquidPseudosteady {
    pub fn new(
        reservoir: Reservoir,
        liquid: Liquid,
        drainage: Drainage,
        average_pressure: f64,
    ) -> CurveResult<Self> {
        reservoir.validate()?;
        liquid.validate()?;
        ensure_positive(average_pressure, "average reservoir pressure")?;
        let productivity_index = productivity_index(&reservoir, &liquid, &drainage)?;
        Ok(Self {
            reservoir,
            liquid,
            drainage,
            average_pressure,
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

    /// J [STB/d/psi].
    pub fn productivity_index(&self) -> f64 {
        self.productivity_index
    }

    pub fn rate_at(&self, pwf: f64) -> f64 {
        self.productivity_index * (self.average_pressure - pwf)
    }
}

impl RateInvertible for LiquidPseudosteady {
    fn max_rate(&self) -> f64 {
        self.rate_at(0.0)
    }

    fn pressure_at(&self, rate: f64) -> Option<f64> {
        linear_pressure(self.average_pressure, self.productivity_index, rate)
    }
}

/// Pseudosteady productivity index J = k·h / (141.2·B·μ·(ln(re/rw) − 0.75 + s)).
pub(crate) fn productivity_index(
    reservoir: &Reservoir,
    liquid: &Liquid,
    drainage: &Drainage,
) -> CurveResult<f64> {
    let term = drainage.pseudosteady_term(reservoir.skin)?;
    Ok(reservoir.flow_capacity()
        / (LIQUID_RADIAL * liquid.formation_volume_factor * liquid.viscosity * term))
}

/// Liquid inflow with constant pressure at the drainage boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidSteady {
    reservoir: Reservoir,
    liquid: Liquid,
    drainage: Drainage,
    boundary_pressure: f64,
    coefficient: f64,
}

impl LiquidSteady {
    pub fn new(
        reservoir: Reservoir,
        liquid: Liquid,
        drainage: Drainage,
        boundary_pressure: f64,
    ) -> CurveResult<Self> {
        reservoir.validate()?;
        liquid.validate()?;
        ensure_positive(boundary_pressure, "boundary pressure")?;
        let term = drainage.steady_term(reservoir.skin)?;
        let coefficient = reservoir.flow_capacity()
            / (LIQUID_RADIAL * liquid.formation_volume_factor * liquid.viscosity * term);
        Ok(Self {
            reservoir,
            liquid,
            drainage,
            boundary_pressure,
            coefficient,
        })
    }

    pub fn reservoir(&self) -> &Reservoir {
        &self.reservoir
    }

    pub fn drainage(&self) -> &Drainage {
        &self.drainage
    }

    pub fn liquid(&self) -> &Liquid {
        &self.liquid
    }

    pub fn rate_at(&self, pwf: f64) -> f64 {
        self.coefficient * (self.boundary_pressure - pwf)
    }
}

impl RateInvertible for LiquidSteady {
    fn max_rate(&self) -> f64 {
        self.rate_at(0.0)
    }

    fn pressure_at(&self, rate: f64) -> Option<f64> {
        linear_pressure(self.boundary_pressure, self.coefficient, rate)
    }
}

/// Gas at a reservoir temperature [°F].
fn validate_gas_temperature(temperature: f64) -> CurveResult<f64> {
    ensure_finite(temperature, "reservoir temperature")?;
    ensure_positive(fahrenheit_to_rankine(temperature), "absolute reservoir temperature")?;
    Ok(temperature)
}

/// Evaluate the gas at the mean of `pwf` and `reference_pressure` and apply
/// `q = k·h·(p_ref² − p_wf²) / (constant·T·μ·z·term)`.
///
/// `Ok(None)` when z does not converge or the result is not finite.
fn gas_rate(
    gas: &GasProperties,
    temperature: f64,
    reservoir: &Reservoir,
    reference_pressure: f64,
    pwf: f64,
    constant: f64,
    term: impl FnOnce(&GasState) -> f64,
) -> CurveResult<Option<f64>> {
    let mean = 0.5 * (pwf + reference_pressure);
    let Some(state) = gas.evaluate(mean, temperature)?.converged() else {
        debug!(pwf, mean, "z did not converge; skipping inflow sample");
        return Ok(None);
    };
    let term = term(&state);
    if !(term.is_finite() && term > 0.0) {
        debug!(pwf, term, "non-positive inflow denominator; skipping sample");
        return Ok(None);
    }
    let q = reservoir.flow_capacity() * (reference_pressure.powi(2) - pwf.powi(2))
        / (constant * fahrenheit_to_rankine(temperature) * state.viscosity * state.z * term);
    Ok(q.is_finite().then_some(q))
}

/// Infinite-acting gas inflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasTransient {
    reservoir: Reservoir,
    transient: Transient,
    gas: GasProperties,
    temperature: f64,
    initial_pressure: f64,
}

impl GasTransient {
    pub fn new(
        reservoir: Reservoir,
        transient: Transient,
        gas: GasProperties,
        temperature: f64,
        initial_pressure: f64,
    ) -> CurveResult<Self> {
        reservoir.validate()?;
        transient.validate()?;
        validate_gas_temperature(temperature)?;
        ensure_positive(initial_pressure, "initial pressure")?;
        // The log-time term depends on μ, so check it at the initial state.
        match gas.evaluate(initial_pressure, temperature)? {
            Convergence::Converged { value: state, .. } => {
                let (k, skin) = (reservoir.permeability, reservoir.skin);
                let term = transient.log_time_term(k, state.viscosity, skin);
                positive_denominator(term, "transient log-time term")?;
            }
            Convergence::DidNotConverge { iterations, .. } => {
                warn!(
                    initial_pressure,
                    temperature,
                    iterations,
                    "z did not converge at initial pressure; log-time term checked per sample"
                );
            }
        }
        Ok(Self {
            reservoir,
            transient,
            gas,
            temperature,
            initial_pressure,
        })
    }

    pub fn gas(&self) -> &GasProperties {
        &self.gas
    }

    pub fn rate_at(&self, pwf: f64) -> CurveResult<Option<f64>> {
        let (k, skin) = (self.reservoir.permeability, self.reservoir.skin);
        gas_rate(
            &self.gas,
            self.temperature,
            &self.reservoir,
            self.initial_pressure,
            pwf,
            GAS_TRANSIENT,
            |state| self.transient.log_time_term(k, state.viscosity, skin),
        )
    }
}

/// Bounded gas inflow at pseudosteady state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasPseudosteady {
    reservoir: Reservoir,
    drainage: Drainage,
    gas: GasProperties,
    temperature: f64,
    average_pressure: f64,
    term: f64,
}

impl GasPseudosteady {
    pub fn new(
        reservoir: Reservoir,
        drainage: Drainage,
        gas: GasProperties,
        temperature: f64,
        average_pressure: f64,
    ) -> CurveResult<Self> {
        reservoir.validate()?;
        validate_gas_temperature(temperature)?;
        ensure_positive(average_pressure, "average reservoir pressure")?;
        let term = drainage.pseudosteady_term(reservoir.skin)?;
        Ok(Self {
            reservoir,
            drainage,
            gas,
            temperature,
            average_pressure,
            term,
        })
    }

    pub fn gas(&self) -> &GasProperties {
        &self.gas
    }

    pub fn drainage(&self) -> &Drainage {
        &self.drainage
    }

    pub fn rate_at(&self, pwf: f64) -> CurveResult<Option<f64>> {
        gas_rate(
            &self.gas,
            self.temperature,
            &self.reservoir,
            self.average_pressure,
            pwf,
            GAS_RADIAL,
            |_| self.term,
        )
    }
}

/// Gas inflow with constant pressure at the drainage boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasSteady {
    reservoir: Reservoir,
    drainage: Drainage,
    gas: GasProperties,
    temperature: f64,
    boundary_pressure: f64,
    term: f64,
}

impl GasSteady {
    pub fn new(
        reservoir: Reservoir,
        drainage: Drainage,
        gas: GasProperties,
        temperature: f64,
        boundary_pressure: f64,
    ) -> CurveResult<Self> {
        reservoir.validate()?;
        validate_gas_temperature(temperature)?;
        ensure_positive(boundary_pressure, "boundary pressure")?;
        let term = drainage.steady_term(reservoir.skin)?;
        Ok(Self {
            reservoir,
            drainage,
            gas,
            temperature,
            boundary_pressure,
            term,
        })
    }

    pub fn gas(&self) -> &GasProperties {
        &self.gas
    }

    pub fn drainage(&self) -> &Drainage {
        &self.drainage
    }

    pub fn rate_at(&self, pwf: f64) -> CurveResult<Option<f64>> {
        gas_rate(
            &self.gas,
            self.temperature,
            &self.reservoir,
            self.boundary_pressure,
            pwf,
            GAS_RADIAL,
            |_| self.term,
        )
    }
}

/// Every supported inflow model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InflowModel {
    LiquidTransient(LiquidTransient),
    LiquidPseudosteady(LiquidPseudosteady),
    LiquidSteady(LiquidSteady),
    GasTransient(GasTransient),
    GasPseudosteady(GasPseudosteady),
    GasSteady(GasSteady),
    TwoPhasePseudosteady(TwoPhasePseudosteady),
}

impl InflowModel {
    pub fn phase(&self) -> Phase {
        match self {
            Self::LiquidTransient(_) | Self::LiquidPseudosteady(_) | Self::LiquidSteady(_) => {
                Phase::Liquid
            }
            Self::GasTransient(_) | Self::GasPseudosteady(_) | Self::GasSteady(_) => Phase::Gas,
            Self::TwoPhasePseudosteady(_) => Phase::TwoPhase,
        }
    }

    pub fn regime(&self) -> Regime {
        match self {
            Self::LiquidTransient(_) | Self::GasTransient(_) => Regime::Transient,
            Self::LiquidPseudosteady(_)
            | Self::GasPseudosteady(_)
            | Self::TwoPhasePseudosteady(_) => Regime::Pseudosteady,
            Self::LiquidSteady(_) | Self::GasSteady(_) => Regime::Steady,
        }
    }

    /// The pressure at which inflow is zero: initial, average or boundary.
    pub fn reference_pressure(&self) -> f64 {
        match self {
            Self::LiquidTransient(m) => m.initial_pressure,
            Self::LiquidPseudosteady(m) => m.average_pressure,
            Self::LiquidSteady(m) => m.boundary_pressure,
            Self::GasTransient(m) => m.initial_pressure,
            Self::GasPseudosteady(m) => m.average_pressure,
            Self::GasSteady(m) => m.boundary_pressure,
            Self::TwoPhasePseudosteady(m) => m.average_pressure(),
        }
    }

    /// Rate delivered at bottomhole pressure `pwf`.
    ///
    /// `Ok(None)` marks a sample that cannot be evaluated.
    pub fn rate_at(&self, pwf: f64) -> CurveResult<Option<f64>> {
        match self {
            Self::LiquidTransient(m) => Ok(Some(m.rate_at(pwf))),
            Self::LiquidPseudosteady(m) => Ok(Some(m.rate_at(pwf))),
            Self::LiquidSteady(m) => Ok(Some(m.rate_at(pwf))),
            Self::GasTransient(m) => m.rate_at(pwf),
            Self::GasPseudosteady(m) => m.rate_at(pwf),
            Self::GasSteady(m) => m.rate_at(pwf),
            Self::TwoPhasePseudosteady(m) => Ok(Some(m.rate_at(pwf))),
        }
    }

    /// Absolute open flow: the rate at zero bottomhole pressure.
    pub fn max_rate(&self) -> CurveResult<Option<f64>> {
        self.rate_at(0.0)
    }

    /// Rate-paced view of the model, if it has one.
    pub fn as_rate_invertible(&self) -> Option<&dyn RateInvertible> {
        match self {
            Self::LiquidTransient(m) => Some(m),
            Self::LiquidPseudosteady(m) => Some(m),
            Self::LiquidSteady(m) => Some(m),
            Self::TwoPhasePseudosteady(m) => Some(m),
            Self::GasTransient(_) | Self::GasPseudosteady(_) | Self::GasSteady(_) => None,
        }
    }

    /// Reject spacing the model cannot honour.
    pub fn check_spacing(&self, spacing: &SpacingSpec) -> CurveResult<()> {
        if spacing.method == SpacingMethod::RateStep && self.as_rate_invertible().is_none() {
            return Err(CurveError::SpacingNotSupported {
                method: SpacingMethod::RateStep.name(),
                model: "gas inflow",
            });
        }
        Ok(())
    }

    /// Generate the IPR.
    ///
    /// Pressure-paced curves run from the reference pressure down to zero;
    /// rate-paced curves run from zero up to the maximum rate.
    pub fn generate(&self, spacing: &SpacingSpec) -> CurveResult<Vec<CurvePoint>> {
        self.check_spacing(spacing)?;

        if spacing.method == SpacingMethod::RateStep {
            let Some(model) = self.as_rate_invertible() else {
                return Ok(Vec::new());
            };
            return Ok(spacing
                .rates_ascending(model.max_rate())
                .into_iter()
                .filter_map(|q| {
                    let p = model.pressure_at(q);
                    if p.is_none() {
                        debug!(rate = q, "rate could not be inverted; skipping sample");
                    }
                    CurvePoint::checked(p?, q)
                })
                .collect());
        }

        let mut curve = Vec::new();
        for p in spacing.pressures_descending(self.reference_pressure()) {
            if let Some(point) = self.rate_at(p)?.and_then(|q| CurvePoint::checked(p, q)) {
                curve.push(point);
            }
        }
        Ok(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wp_fluids::{ViscosityMethod, ZMethod};

    fn reservoir() -> Reservoir {
        Reservoir {
            permeability: 50.0,
            thickness: 20.0,
            skin: 0.0,
        }
    }

    fn liquid() -> Liquid {
        Liquid {
            viscosity: 2.0,
            formation_volume_factor: 1.2,
        }
    }

    fn drainage() -> Drainage {
        Drainage {
            drainage_radius: 1000.0,
            wellbore_radius: 0.3,
        }
    }

    fn transient() -> Transient {
        Transient {
            porosity: 0.2,
            total_compressibility: 1e-5,
            wellbore_radius: 0.3,
            time: 24.0,
        }
    }

    fn expected_j() -> f64 {
        1000.0 / (141.2 * 1.2 * 2.0 * ((1000.0f64 / 0.3).ln() - 0.75))
    }

    #[test]
    fn liquid_pseudosteady_two_points() {
        let model = InflowModel::LiquidPseudosteady(
            LiquidPseudosteady::new(reservoir(), liquid(), drainage(), 3000.0).unwrap(),
        );
        let curve = model.generate(&SpacingSpec::point_count(2.0)).unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve[0], CurvePoint { pressure: 3000.0, rate: 0.0 });
        assert_eq!(curve[1].pressure, 0.0);
        assert!((curve[1].rate - expected_j() * 3000.0).abs() < 1e-9);
    }

    #[test]
    fn steady_rate_below_pseudosteady() {
        let pss = LiquidPseudosteady::new(reservoir(), liquid(), drainage(), 3000.0).unwrap();
        let ss = LiquidSteady::new(reservoir(), liquid(), drainage(), 3000.0).unwrap();
        assert!(ss.max_rate() < pss.max_rate());
        let expected = 1000.0 * 3000.0 / (141.2 * 1.2 * 2.0 * (1000.0f64 / 0.3).ln());
        assert!((ss.max_rate() - expected).abs() < 1e-9);
    }

    #[test]
    fn liquid_transient_declines_with_time() {
        let early = LiquidTransient::new(reservoir(), liquid(), transient(), 3000.0).unwrap();
        let late = LiquidTransient::new(
            reservoir(),
            liquid(),
            Transient {
                time: 2400.0,
                ..transient()
            },
            3000.0,
        )
        .unwrap();
        assert!(late.max_rate() < early.max_rate());

        let term = 24f64.log10() + (50.0 / (0.2 * 2.0 * 1e-5 * 0.09f64)).log10() - 3.23;
        let expected = 1000.0 * 3000.0 / (162.6 * 1.2 * 2.0 * term);
        assert!((early.max_rate() - expected).abs() < 1e-9);
    }

    #[test]
    fn degenerate_denominators_rejected() {
        let skinned = Reservoir {
            skin: -10.0,
            ..reservoir()
        };
        let err = LiquidPseudosteady::new(skinned, liquid(), drainage(), 3000.0).unwrap_err();
        assert!(matches!(err, CurveError::DegenerateDenominator { .. }));

        let tight = Drainage {
            drainage_radius: 0.3,
            wellbore_radius: 0.3,
        };
        assert!(LiquidSteady::new(reservoir(), liquid(), tight, 3000.0).is_err());

        let instant = Transient {
            time: 1e-9,
            ..transient()
        };
        assert!(LiquidTransient::new(reservoir(), liquid(), instant, 3000.0).is_err());
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let bad = Reservoir {
            permeability: 0.0,
            ..reservoir()
        };
        assert!(LiquidPseudosteady::new(bad, liquid(), drainage(), 3000.0).is_err());
        assert!(LiquidPseudosteady::new(reservoir(), liquid(), drainage(), -1.0).is_err());
    }

    #[test]
    fn rate_step_inverts_linear_models() {
        let model = InflowModel::LiquidSteady(
            LiquidSteady::new(reservoir(), liquid(), drainage(), 2000.0).unwrap(),
        );
        let curve = model.generate(&SpacingSpec::rate_step(100.0)).unwrap();
        let q_max = model.max_rate().unwrap().unwrap();
        assert_eq!(curve[0].rate, 0.0);
        assert!((curve[0].pressure - 2000.0).abs() < 1e-9);
        let last = curve.last().unwrap();
        assert_eq!(last.rate, q_max);
        assert!(last.pressure.abs() < 1e-6);
        for pair in curve.windows(2) {
            assert!(pair[1].rate > pair[0].rate);
            assert!(pair[1].pressure < pair[0].pressure);
        }
    }

    fn gas() -> GasProperties {
        GasProperties::new(0.7)
            .unwrap()
            .with_z_method(ZMethod::DranchukAbouKassem)
            .with_viscosity_method(ViscosityMethod::LeeGonzalezEakin)
    }

    #[test]
    fn gas_transient_accepts_unconverged_initial_state() {
        // Tpr ≈ 1.10: DAK does not converge between about 705 and 1115 psia.
        let heavy = GasProperties::new(1.2)
            .unwrap()
            .with_z_method(ZMethod::DranchukAbouKassem)
            .with_viscosity_method(ViscosityMethod::LeeGonzalezEakin);
        assert!(!heavy.evaluate(900.0, 135.0).unwrap().is_converged());

        let model = InflowModel::GasTransient(
            GasTransient::new(reservoir(), transient(), heavy, 135.0, 900.0).unwrap(),
        );
        let curve = model.generate(&SpacingSpec::point_count(11.0)).unwrap();

        // Samples whose mean pressure lands in the band are dropped.
        assert_eq!(curve.len(), 6);
        assert!((curve[0].pressure - 450.0).abs() < 1e-9);
        assert!(curve.iter().all(|p| p.rate.is_finite() && p.rate > 0.0));
    }

    #[test]
    fn gas_rejects_rate_step() {
        let model = InflowModel::GasPseudosteady(
            GasPseudosteady::new(reservoir(), drainage(), gas(), 200.0, 3000.0).unwrap(),
        );
        let err = model.generate(&SpacingSpec::rate_step(100.0)).unwrap_err();
        assert!(matches!(err, CurveError::SpacingNotSupported { .. }));
    }

    #[test]
    fn gas_pseudosteady_curve_is_monotone() {
        let model = InflowModel::GasPseudosteady(
            GasPseudosteady::new(reservoir(), drainage(), gas(), 200.0, 3000.0).unwrap(),
        );
        let curve = model.generate(&SpacingSpec::point_count(11.0)).unwrap();
        assert_eq!(curve.len(), 11);
        assert_eq!(curve[0].rate, 0.0);
        for pair in curve.windows(2) {
            assert!(pair[1].rate > pair[0].rate);
        }
    }

    #[test]
    fn gas_aof_matches_hand_calculation() {
        let model = GasPseudosteady::new(reservoir(), drainage(), gas(), 200.0, 3000.0).unwrap();
        let state = gas().evaluate(1500.0, 200.0).unwrap().converged().unwrap();
        let term = (1000.0f64 / 0.3).ln() - 0.75;
        let expected = 1000.0 * 3000.0f64.powi(2)
            / (1422.0 * 659.67 * state.viscosity * state.z * term);
        let aof = model.rate_at(0.0).unwrap().unwrap();
        assert!((aof - expected).abs() / expected < 1e-9);
    }

    #[test]
    fn gas_steady_and_transient_generate() {
        let steady = InflowModel::GasSteady(
            GasSteady::new(reservoir(), drainage(), gas(), 200.0, 3000.0).unwrap(),
        );
        let transient = InflowModel::GasTransient(
            GasTransient::new(reservoir(), transient(), gas(), 200.0, 3000.0).unwrap(),
        );
        for model in [steady, transient] {
            let curve = model.generate(&SpacingSpec::pressure_step(500.0)).unwrap();
            assert_eq!(curve.len(), 7);
            assert_eq!(curve.last().unwrap().pressure, 0.0);
            assert!(curve.last().unwrap().rate > 0.0);
        }
    }

    #[test]
    fn gas_domain_violation_is_an_error() {
        let cold = GasPseudosteady::new(reservoir(), drainage(), gas(), -150.0, 3000.0).unwrap();
        let err = InflowModel::GasPseudosteady(cold)
            .generate(&SpacingSpec::point_count(3.0))
            .unwrap_err();
        assert!(matches!(err, CurveError::Fluid(_)));
    }

    #[test]
    fn phase_and_regime_labels() {
        let model = InflowModel::LiquidSteady(
            LiquidSteady::new(reservoir(), liquid(), drainage(), 2000.0).unwrap(),
        );
        assert_eq!(model.phase(), Phase::Liquid);
        assert_eq!(model.regime(), Regime::Steady);
        assert_eq!(Phase::TwoPhase.to_string(), "two-phase");
    }
}
