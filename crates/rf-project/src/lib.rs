//! rf-project: scenario file format and validation.

use std::path::Path;

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_scenario};

/// Newest scenario format this crate reads and writes.
pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding of a scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// `.json` is JSON, anything else is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// Decode and validate a scenario held in memory.
pub fn parse_scenario(content: &str, format: Format) -> ProjectResult<Scenario> {
    let scenario: Scenario = match format {
        Format::Yaml => serde_yaml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    validate_scenario(&scenario)?;
    Ok(scenario)
}

/// Validate, then encode. Invalid scenarios are never rendered.
pub fn render_scenario(scenario: &Scenario, format: Format) -> ProjectResult<String> {
    validate_scenario(scenario)?;
    let content = match format {
        Format::Yaml => serde_yaml::to_string(scenario)?,
        Format::Json => serde_json::to_string_pretty(scenario)?,
    };
    Ok(content)
}

pub fn load_as(path: &Path, format: Format) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    parse_scenario(&content, format)
}

pub fn save_as(path: &Path, scenario: &Scenario, format: Format) -> ProjectResult<()> {
    let content = render_scenario(scenario, format)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_yaml(path: &Path) -> ProjectResult<Scenario> {
    load_as(path, Format::Yaml)
}

pub fn save_yaml(path: &Path, scenario: &Scenario) -> ProjectResult<()> {
    save_as(path, scenario, Format::Yaml)
}

pub fn load_json(path: &Path) -> ProjectResult<Scenario> {
    load_as(path, Format::Json)
}

pub fn save_json(path: &Path, scenario: &Scenario) -> ProjectResult<()> {
    save_as(path, scenario, Format::Json)
}

/// Load with the format picked by [`Format::from_path`].
pub fn load(path: &Path) -> ProjectResult<Scenario> {
    load_as(path, Format::from_path(path))
}
