//! Gas state evaluation: z → density → viscosity at a pressure and temperature.

use crate::convergence::Convergence;
use crate::error::FluidResult;
use crate::pseudo_critical::{GasComposition, PseudoCritical, Reduced, molecular_weight};
use crate::viscosity::{ViscosityInputs, ViscosityMethod, gas_viscosity};
use crate::zfactor::{ZMethod, z_factor};
use wp_core::numeric::ensure_positive;
use wp_core::units::{constants::R_FIELD, fahrenheit_to_rankine};

/// A natural gas described by gravity and composition, plus the correlations
/// used to evaluate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    gravity: f64,
    composition: GasComposition,
    pseudo_critical: PseudoCritical,
    pub z_method: ZMethod,
    pub viscosity_method: ViscosityMethod,
}

/// Properties of the gas at one (p, T).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasState {
    /// Pressure [psia].
    pub pressure: f64,
    /// Temperature [°F].
    pub temperature: f64,
    pub reduced: Reduced,
    pub z: f64,
    /// Density [lbm/ft³].
    pub density: f64,
    /// Viscosity [cp].
    pub viscosity: f64,
}

impl GasProperties {
    /// Sweet gas with default correlations.
    pub fn new(gravity: f64) -> FluidResult<Self> {
        Self::with_composition(gravity, GasComposition::default())
    }

    pub fn with_composition(gravity: f64, composition: GasComposition) -> FluidResult<Self> {
        let gravity = ensure_positive(gravity, "gas specific gravity")?;
        Ok(Self {
            gravity,
            composition,
            pseudo_critical: PseudoCritical::from_gravity(gravity, &composition)?,
            z_method: ZMethod::default(),
            viscosity_method: ViscosityMethod::default(),
        })
    }

    pub fn with_z_method(mut self, method: ZMethod) -> Self {
        self.z_method = method;
        self
    }

    pub fn with_viscosity_method(mut self, method: ViscosityMethod) -> Self {
        self.viscosity_method = method;
        self
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn composition(&self) -> &GasComposition {
        &self.composition
    }

    pub fn pseudo_critical(&self) -> PseudoCritical {
        self.pseudo_critical
    }

    /// Apparent molecular weight [lbm/lbmol].
    pub fn molecular_weight(&self) -> f64 {
        molecular_weight(self.gravity)
    }

    /// Evaluate the gas at `pressure` [psia] and `temperature` [°F].
    ///
    /// A domain violation of the z correlation is an error; a z solve that
    /// hits its iteration cap yields `DidNotConverge` carrying the state
    /// built from the last iterate.
    pub fn evaluate(&self, pressure: f64, temperature: f64) -> FluidResult<Convergence<GasState>> {
        let reduced = self.pseudo_critical.reduce(pressure, temperature);
        match z_factor(self.z_method, reduced.ppr, reduced.tpr)? {
            Convergence::Converged { value, iterations } => Ok(Convergence::Converged {
                value: self.state_at(pressure, temperature, reduced, value)?,
                iterations,
            }),
            Convergence::DidNotConverge { last, iterations } => Ok(Convergence::DidNotConverge {
                last: self.state_at(pressure, temperature, reduced, last)?,
                iterations,
            }),
        }
    }

    fn state_at(
        &self,
        pressure: f64,
        temperature: f64,
        reduced: Reduced,
        z: f64,
    ) -> FluidResult<GasState> {
        let density = self.density(pressure, temperature, z);
        let viscosity = gas_viscosity(
            self.viscosity_method,
            &ViscosityInputs {
                gravity: self.gravity,
                molecular_weight: self.molecular_weight(),
                temperature,
                density,
                reduced,
                composition: &self.composition,
            },
        )?;
        Ok(GasState {
            pressure,
            temperature,
            reduced,
            z,
            density,
            viscosity,
        })
    }

    /// Real-gas density [lbm/ft³].
    pub fn density(&self, pressure: f64, temperature: f64, z: f64) -> f64 {
        self.molecular_weight() * pressure / (z * R_FIELD * fahrenheit_to_rankine(temperature))
    }
}
