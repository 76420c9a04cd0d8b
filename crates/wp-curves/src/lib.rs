//! wp-curves: inflow (IPR) and outflow (OPR) performance curve generators.
//!
//! A generator consumes one typed model plus a [`SpacingSpec`] and returns an
//! ordered list of [`CurvePoint`]s:
//! - [`InflowModel`] covers liquid, gas and two-phase reservoirs across the
//!   transient, pseudosteady and steady regimes
//! - [`OutflowModel`] covers single-phase oil (closed form) and single-phase
//!   gas (segment marching)
//!
//! Points that cannot be evaluated (non-converged z, non-finite
//! intermediates) are left out of the curve; correlation domain violations
//! abort the whole request with an error.
//!
//! # Example
//!
//! ```
//! use wp_curves::{InflowModel, LiquidPseudosteady, SpacingSpec};
//! use wp_curves::inflow::{Drainage, Liquid, Reservoir};
//!
//! let model = InflowModel::LiquidPseudosteady(
//!     LiquidPseudosteady::new(
//!         Reservoir { permeability: 50.0, thickness: 20.0, skin: 0.0 },
//!         Liquid { viscosity: 2.0, formation_volume_factor: 1.2 },
//!         Drainage { drainage_radius: 1000.0, wellbore_radius: 0.3 },
//!         3000.0,
//!     )
//!     .unwrap(),
//! );
//! let curve = model.generate(&SpacingSpec::point_count(2.0)).unwrap();
//! assert_eq!(curve[0].rate, 0.0);
//! assert_eq!(curve[1].pressure, 0.0);
//! ```

pub mod error;
pub mod gas_outflow;
pub mod inflow;
pub mod outflow;
pub mod point;
pub mod spacing;
pub mod two_phase;

pub use error::{CurveError, CurveResult};
pub use gas_outflow::GasOutflow;
pub use inflow::{
    GasPseudosteady, GasSteady, GasTransient, InflowModel, LiquidPseudosteady, LiquidSteady,
    LiquidTransient, Phase, Regime,
};
pub use outflow::{OilOutflow, OutflowModel};
pub use point::CurvePoint;
pub use spacing::{RateInvertible, SpacingMethod, SpacingSpec};
pub use two_phase::TwoPhasePseudosteady;
