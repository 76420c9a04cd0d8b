//! Schema migration framework.

use crate::ProjectError;
use crate::schema::{CaseFile, RoughnessDef};

pub const LATEST_VERSION: u32 = 2;

pub fn migrate_to_latest(mut case: CaseFile) -> Result<CaseFile, ProjectError> {
    while case.version < LATEST_VERSION {
        case = migrate_one_version(case)?;
    }
    Ok(case)
}

fn migrate_one_version(case: CaseFile) -> Result<CaseFile, ProjectError> {
    match case.version {
        0 => migrate_v0_to_v1(case),
        1 => migrate_v1_to_v2(case),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

fn migrate_v0_to_v1(mut case: CaseFile) -> Result<CaseFile, ProjectError> {
    case.version = 1;
    Ok(case)
}

/// Version 2 requires roughness to say whether it is absolute or relative.
fn migrate_v1_to_v2(mut case: CaseFile) -> Result<CaseFile, ProjectError> {
    if let Some(outflow) = &mut case.outflow {
        if let RoughnessDef::Raw(_) = outflow.roughness {
            outflow.roughness = outflow.roughness.normalized();
        }
    }
    case.version = 2;
    Ok(case)
}
