//! Package resource descriptor.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Desired installation state of a package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageEnsure {
    /// Installed at any version.
    #[default]
    Present,
    /// Installed and kept at the newest available version.
    Latest,
    /// Not installed.
    Absent,
}

impl fmt::Display for PackageEnsure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Latest => write!(f, "latest"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

impl FromStr for PackageEnsure {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "present" | "installed" => Ok(Self::Present),
            "latest" => Ok(Self::Latest),
            "absent" => Ok(Self::Absent),
            _ => Err(ConfigError::InvalidValue {
                option: "package_ensure".to_string(),
                value: s.to_string(),
                expected: "present, latest, absent".to_string(),
            }),
        }
    }
}

/// A package the host should (or should not) have installed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PackageResource {
    /// Package name as known to the system package manager.
    pub name: String,
    /// Desired state.
    pub ensure: PackageEnsure,
}

impl PackageResource {
    /// A package that must be present.
    #[must_use]
    pub fn present(name: &str) -> Self {
        Self::new(name, PackageEnsure::Present)
    }

    /// A package with an explicit desired state.
    #[must_use]
    pub fn new(name: &str, ensure: PackageEnsure) -> Self {
        Self {
            name: name.to_string(),
            ensure,
        }
    }
}

impl fmt::Display for PackageResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "package {} ({})", self.name, self.ensure)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ensure_parses_known_values() {
        assert_eq!("present".parse::<PackageEnsure>().unwrap(), PackageEnsure::Present);
        assert_eq!("installed".parse::<PackageEnsure>().unwrap(), PackageEnsure::Present);
        assert_eq!("Latest".parse::<PackageEnsure>().unwrap(), PackageEnsure::Latest);
        assert_eq!("absent".parse::<PackageEnsure>().unwrap(), PackageEnsure::Absent);
    }

    #[test]
    fn ensure_rejects_unknown_value() {
        let err = "purged".parse::<PackageEnsure>().unwrap_err();
        assert!(err.to_string().contains("package_ensure"));
        assert!(err.to_string().contains("purged"));
    }

    #[test]
    fn present_constructor() {
        let p = PackageResource::present("gd");
        assert_eq!(p.name, "gd");
        assert_eq!(p.ensure, PackageEnsure::Present);
    }

    #[test]
    fn display_includes_ensure() {
        let p = PackageResource::new("nginx", PackageEnsure::Latest);
        assert_eq!(p.to_string(), "package nginx (latest)");
    }
}
