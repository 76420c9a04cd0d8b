//! Error types for conduit and friction operations.

use thiserror::Error;
use wp_core::error::WpError;

/// Errors that can occur while describing a conduit or evaluating friction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unknown friction model: {0}")]
    UnknownModel(String),
}

pub type FlowResult<T> = Result<T, FlowError>;

impl From<WpError> for FlowError {
    fn from(e: WpError) -> Self {
        match e {
            WpError::NonFinite { what, .. } | WpError::NonPositive { what, .. } => {
                FlowError::NonPhysical { what }
            }
            WpError::InvalidArg { what } | WpError::Invariant { what } => {
                FlowError::InvalidArg { what }
            }
        }
    }
}
