//! Shared application service layer for well performance curves.
//!
//! Loads and validates case files, compiles their definitions into typed
//! models, runs the curve generators and returns serializable reports. The
//! CLI is a thin shell over this crate.

pub mod case_compile;
pub mod case_service;
pub mod error;
pub mod query;
pub mod run_service;

pub use case_compile::{compile_inflow, compile_outflow, gas_properties};
pub use case_service::{CaseSummary, load_case, save_case, summarize_case, validate_case};
pub use error::{AppError, AppResult};
pub use query::{GasQuery, GasReport, evaluate_gas, friction_factor};
pub use run_service::{CaseReport, CurveReport, run_case, run_case_file};
