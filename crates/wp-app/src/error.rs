//! Error types for the wp-app service layer.

use std::path::PathBuf;

/// Application error type wrapping the backend crates' errors behind one
/// interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case error: {0}")]
    Case(String),

    #[error("Failed to write report file: {path}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Case validation failed: {0}")]
    Validation(String),

    #[error("Unsupported request: {message}")]
    Unsupported { message: String },

    #[error("Case compilation failed: {0}")]
    Compile(String),

    #[error("Curve generation failed: {0}")]
    Curve(String),

    #[error("Fluid property error: {0}")]
    Fluid(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for wp-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<wp_project::ProjectError> for AppError {
    fn from(err: wp_project::ProjectError) -> Self {
        match err {
            wp_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Case(other.to_string()),
        }
    }
}

impl From<wp_project::ValidationError> for AppError {
    fn from(err: wp_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<wp_curves::CurveError> for AppError {
    fn from(err: wp_curves::CurveError) -> Self {
        AppError::Curve(err.to_string())
    }
}

impl From<wp_fluids::FluidError> for AppError {
    fn from(err: wp_fluids::FluidError) -> Self {
        AppError::Fluid(err.to_string())
    }
}

impl From<wp_flow::FlowError> for AppError {
    fn from(err: wp_flow::FlowError) -> Self {
        AppError::Compile(err.to_string())
    }
}

impl From<wp_core::WpError> for AppError {
    fn from(err: wp_core::WpError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
