//! wp-fluids: real-gas property correlations for the well performance engine.
//!
//! Provides:
//! - Pseudo-critical and reduced properties from gas specific gravity
//! - Selectable z-factor correlations (iterative, cubic EOS, explicit, tabulated)
//! - Selectable gas viscosity correlations
//! - `GasProperties` / `GasState` bundling z → density → viscosity at a (p, T)
//!
//! # Architecture
//!
//! Iterative solvers never return a magic number on failure. They return
//! [`Convergence`], which callers must inspect before using the value. Inputs
//! outside a correlation's validated range are rejected with
//! [`FluidError::OutOfDomain`]; no other correlation is substituted.
//!
//! # Example
//!
//! ```
//! use wp_fluids::{GasProperties, ZMethod};
//!
//! let gas = GasProperties::new(0.7).unwrap().with_z_method(ZMethod::DranchukAbouKassem);
//! let state = gas.evaluate(2000.0, 200.0).unwrap().converged().unwrap();
//! assert!(state.z > 0.8 && state.z < 0.95);
//! ```

pub mod convergence;
pub mod error;
pub mod pseudo_critical;
pub mod state;
pub mod viscosity;
pub mod z_table;
pub mod zfactor;

// Re-exports for ergonomics
pub use convergence::Convergence;
pub use error::{FluidError, FluidResult};
pub use pseudo_critical::{GasComposition, PseudoCritical, Reduced};
pub use state::{GasProperties, GasState};
pub use viscosity::{ViscosityMethod, gas_viscosity};
pub use zfactor::{ZMethod, z_factor};
