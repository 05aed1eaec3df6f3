//! cb-project: canonical bench file format and validation.
//!
//! A bench file is the store's serialization contract: the placed
//! components (id, type, position, state) and the wires between them.
//! Files load from YAML or JSON, are migrated to the latest version, and
//! are validated before use. Malformed records are defaulted or dropped
//! with a warning; loading never panics on content.

pub mod convert;
pub mod migrate;
pub mod schema;
pub mod validate;

pub use convert::{capture, instantiate, load_into};
pub use migrate::{migrate_to_latest, LATEST_VERSION};
pub use schema::{BenchFile, ComponentDef, ConnectionDef};
pub use validate::{validate_bench, ValidationError};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<BenchFile> {
    let content = std::fs::read_to_string(path)?;
    let mut file: BenchFile = serde_yaml::from_str(&content)?;
    file = migrate_to_latest(file)?;
    validate_bench(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &std::path::Path, file: &BenchFile) -> ProjectResult<()> {
    validate_bench(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<BenchFile> {
    let content = std::fs::read_to_string(path)?;
    let mut file: BenchFile = serde_json::from_str(&content)?;
    file = migrate_to_latest(file)?;
    validate_bench(&file)?;
    Ok(file)
}

pub fn save_json(path: &std::path::Path, file: &BenchFile) -> ProjectResult<()> {
    validate_bench(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}
