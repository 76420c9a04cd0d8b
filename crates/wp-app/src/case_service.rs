//! Case loading, saving, validation and introspection.

use std::path::Path;
use wp_project::schema::{CaseFile, OutflowFluid};

use crate::error::AppResult;

/// Summary of a case for listing.
#[derive(Debug, Clone)]
pub struct CaseSummary {
    pub name: String,
    pub version: u32,
    /// "<phase> <regime>" of the inflow request, if any.
    pub inflow: Option<String>,
    /// "oil" or "gas" for the outflow request, if any.
    pub outflow: Option<String>,
}

/// Load, migrate and validate a YAML or JSON case file.
pub fn load_case(path: &Path) -> AppResult<CaseFile> {
    Ok(wp_project::load_case(path)?)
}

/// Save a case; the extension picks the encoding.
pub fn save_case(path: &Path, case: &CaseFile) -> AppResult<()> {
    Ok(wp_project::save_case(path, case)?)
}

pub fn validate_case(case: &CaseFile) -> AppResult<()> {
    Ok(wp_project::validate_case(case)?)
}

pub fn summarize_case(case: &CaseFile) -> CaseSummary {
    CaseSummary {
        name: case.name.clone(),
        version: case.version,
        inflow: case
            .inflow
            .as_ref()
            .map(|i| format!("{} {}", i.phase, i.regime)),
        outflow: case.outflow.as_ref().map(|o| {
            match o.fluid {
                OutflowFluid::Oil => "oil",
                OutflowFluid::Gas => "gas",
            }
            .to_string()
        }),
    }
}
