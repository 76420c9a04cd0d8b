//! Fluid property errors.

use thiserror::Error;
use wp_core::WpError;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during gas property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Reduced pressure/temperature outside the correlation's validated range.
    #[error("{correlation} is not valid at Ppr = {ppr:.4}, Tpr = {tpr:.4}")]
    OutOfDomain {
        correlation: &'static str,
        ppr: f64,
        tpr: f64,
    },

    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Selector text that names no known correlation.
    #[error("Unknown {kind}: {value}")]
    UnknownSelector { kind: &'static str, value: String },

    #[error(transparent)]
    Core(#[from] WpError),
}
