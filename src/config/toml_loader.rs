//! File-backed configuration loading (TOML, with JSON for fact dumps).
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ConfigError;

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load a TOML document into `T`.
///
/// A missing file deserializes as an empty document, so every field falls
/// back to its `#[serde(default)]` value.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = if path.exists() {
        read(path)?
    } else {
        String::new()
    };

    toml::from_str(&content).map_err(|e| ConfigError::InvalidSyntax {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })
}

/// Load a JSON document into `T`. The file must exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|e| ConfigError::InvalidSyntax {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
