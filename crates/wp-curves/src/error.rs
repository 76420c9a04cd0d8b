//! Error types for curve generation.

use thiserror::Error;
use wp_core::WpError;
use wp_flow::FlowError;
use wp_fluids::FluidError;

/// Errors that abort a curve request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("Fluid property error: {0}")]
    Fluid(#[from] FluidError),

    #[error("Conduit error: {0}")]
    Flow(#[from] FlowError),

    #[error("Invalid input: {0}")]
    Core(#[from] WpError),

    /// A radial-flow or log-time denominator that must stay positive.
    #[error("Degenerate denominator in {what}: {value}")]
    DegenerateDenominator { what: &'static str, value: f64 },

    #[error("{method} spacing is not supported for {model}")]
    SpacingNotSupported {
        method: &'static str,
        model: &'static str,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type CurveResult<T> = Result<T, CurveError>;
