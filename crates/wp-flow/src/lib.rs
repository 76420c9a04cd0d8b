//! wp-flow: conduit geometry and pipe-flow friction for the well performance engine.
//!
//! Provides:
//! - Fanning friction factor correlations (`FrictionModel`, `fanning`)
//! - Conduit geometry with absolute or relative roughness
//!
//! # Example
//!
//! ```
//! use wp_flow::{FrictionModel, fanning};
//!
//! // Laminar flow is 16/Re whatever the selected correlation.
//! let f = fanning(1000.0, 1e-4, FrictionModel::Churchill);
//! assert_eq!(f, 0.016);
//! ```

pub mod conduit;
pub mod error;
pub mod friction;

// Re-exports
pub use conduit::{Conduit, Roughness};
pub use error::{FlowError, FlowResult};
pub use friction::{FrictionModel, LAMINAR_REYNOLDS, fanning};
