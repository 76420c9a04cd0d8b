//! wp-core: stable foundation for the well performance engine.
//!
//! Contains:
//! - units (uom quantities + oilfield/SI conversions)
//! - numeric (Real + argument guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WpError, WpResult};
pub use numeric::*;
pub use units::*;
