//! wp-project: case file format and validation.

pub mod migrate;
pub mod schema;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_case};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Unsupported case file extension: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Case file encodings, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFormat {
    Yaml,
    Json,
}

impl CaseFormat {
    pub fn from_path(path: &Path) -> ProjectResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ProjectError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Parse, migrate and validate case text.
pub fn parse_case(content: &str, format: CaseFormat) -> ProjectResult<CaseFile> {
    let mut case: CaseFile = match format {
        CaseFormat::Yaml => serde_yaml::from_str(content)?,
        CaseFormat::Json => serde_json::from_str(content)?,
    };
    case = migrate_to_latest(case)?;
    validate_case(&case)?;
    Ok(case)
}

/// Load a YAML or JSON case file depending on its extension.
pub fn load_case(path: &Path) -> ProjectResult<CaseFile> {
    let format = CaseFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_case(&content, format)
}

pub fn save_case(path: &Path, case: &CaseFile) -> ProjectResult<()> {
    match CaseFormat::from_path(path)? {
        CaseFormat::Yaml => save_yaml(path, case),
        CaseFormat::Json => save_json(path, case),
    }
}

pub fn load_yaml(path: &Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    parse_case(&content, CaseFormat::Yaml)
}

pub fn save_yaml(path: &Path, case: &CaseFile) -> ProjectResult<()> {
    validate_case(case)?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    parse_case(&content, CaseFormat::Json)
}

pub fn save_json(path: &Path, case: &CaseFile) -> ProjectResult<()> {
    validate_case(case)?;
    let content = serde_json::to_string_pretty(case)?;
    std::fs::write(path, content)?;
    Ok(())
}
