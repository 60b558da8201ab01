//! User options and facts loading.
pub mod toml_loader;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::platform::Facts;
use crate::resources::PackageEnsure;

/// Where Debian-family hosts fetch nginx from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageSource {
    /// The nginx.org package archive.
    #[default]
    #[serde(alias = "default")]
    Nginx,
    /// The Phusion Passenger archive (nginx built with Passenger).
    Passenger,
}

impl fmt::Display for PackageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nginx => write!(f, "nginx"),
            Self::Passenger => write!(f, "passenger"),
        }
    }
}

impl FromStr for PackageSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nginx" | "default" => Ok(Self::Nginx),
            "passenger" => Ok(Self::Passenger),
            _ => Err(ConfigError::InvalidValue {
                option: "package_source".to_string(),
                value: s.to_string(),
                expected: "nginx, passenger".to_string(),
            }),
        }
    }
}

/// User-supplied options controlling package selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Register the vendor repository where one applies.
    pub manage_repo: bool,
    /// Package archive used on Debian-family hosts.
    pub package_source: PackageSource,
    /// Name of the nginx package.
    pub package_name: String,
    /// Desired state of the nginx package.
    pub package_ensure: PackageEnsure,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            manage_repo: true,
            package_source: PackageSource::Nginx,
            package_name: "nginx".to_string(),
            package_ensure: PackageEnsure::Present,
        }
    }
}

/// Load options from a TOML file; a missing file yields defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds invalid values.
pub fn load_options(path: &Path) -> Result<Options, ConfigError> {
    toml_loader::load_config(path)
}

/// Load facts from a `.json` fact dump or a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed. Unlike options,
/// a missing facts file is an error.
pub fn load_facts(path: &Path) -> Result<Facts, ConfigError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        return toml_loader::load_json(path);
    }
    if !path.exists() {
        return Err(ConfigError::Io {
            path: path.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "facts file not found"),
        });
    }
    toml_loader::load_config(path)
}
