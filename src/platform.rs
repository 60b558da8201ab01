//! Operating system facts and platform classification.
//!
//! [`Facts`] is the immutable record handed to the selector. It is usually
//! deserialized from a facts file produced by an external fact gatherer, but
//! can also be derived from `/etc/os-release` on the local host.
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClassificationError;

/// Operating system family, as reported by the `osfamily` fact.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OsFamily {
    /// RedHat-like systems (CentOS, RHEL, Scientific, Fedora, Amazon).
    RedHat,
    /// Debian-like systems (Debian, Ubuntu).
    Debian,
    /// SUSE-like systems (openSUSE, SLES).
    Suse,
    /// Generic Linux; older fact gatherers report Amazon Linux this way.
    Linux,
    /// Anything else, carrying the raw fact value.
    Other(String),
    /// No family fact was supplied.
    #[default]
    Unknown,
}

impl FromStr for OsFamily {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let family = match s.trim().to_ascii_lowercase().as_str() {
            "" => Self::Unknown,
            "redhat" => Self::RedHat,
            "debian" => Self::Debian,
            "suse" => Self::Suse,
            "linux" => Self::Linux,
            _ => Self::Other(s.trim().to_string()),
        };
        Ok(family)
    }
}

impl From<String> for OsFamily {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(family) => family,
            Err(never) => match never {},
        }
    }
}

impl From<OsFamily> for String {
    fn from(family: OsFamily) -> Self {
        family.to_string()
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedHat => write!(f, "RedHat"),
            Self::Debian => write!(f, "Debian"),
            Self::Suse => write!(f, "Suse"),
            Self::Linux => write!(f, "Linux"),
            Self::Other(name) => write!(f, "{name}"),
            Self::Unknown => Ok(()),
        }
    }
}

/// Pre-gathered identification facts for a host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Facts {
    /// Operating system name (`operatingsystem`), e.g. `CentOS` or `Ubuntu`.
    #[serde(rename = "operatingsystem")]
    pub operating_system: String,
    /// Operating system family (`osfamily`).
    #[serde(rename = "osfamily")]
    pub os_family: OsFamily,
    /// Distribution codename (`lsbdistcodename`); may be empty.
    #[serde(rename = "lsbdistcodename")]
    pub distribution_codename: String,
    /// Major release number (`operatingsystemmajrelease`), when known.
    #[serde(
        rename = "operatingsystemmajrelease",
        skip_serializing_if = "Option::is_none"
    )]
    pub os_major_release: Option<String>,
}

impl Facts {
    /// Create facts from the three core values.
    #[must_use]
    pub fn new(operating_system: &str, os_family: OsFamily, distribution_codename: &str) -> Self {
        Self {
            operating_system: operating_system.to_string(),
            os_family,
            distribution_codename: distribution_codename.to_string(),
            os_major_release: None,
        }
    }

    /// Attach a major release number.
    #[must_use]
    pub fn with_major_release(mut self, release: &str) -> Self {
        self.os_major_release = Some(release.to_string());
        self
    }

    /// Whether the operating system name matches `name`, ignoring case.
    #[must_use]
    pub fn is_os(&self, name: &str) -> bool {
        self.operating_system.eq_ignore_ascii_case(name)
    }

    /// Build facts from the contents of an `os-release` file.
    ///
    /// The family is taken from `ID` first and then from each `ID_LIKE`
    /// entry; the codename from `VERSION_CODENAME` (falling back to
    /// `UBUNTU_CODENAME`); the major release from the leading component of
    /// `VERSION_ID`.
    #[must_use]
    pub fn from_os_release(content: &str) -> Self {
        let mut id = String::new();
        let mut id_like = String::new();
        let mut codename = String::new();
        let mut ubuntu_codename = String::new();
        let mut version_id = String::new();

        for line in content.lines() {
            let Some((key, value)) = line.trim().split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches('"').trim_matches('\'').to_string();
            match key {
                "ID" => id = value,
                "ID_LIKE" => id_like = value,
                "VERSION_CODENAME" => codename = value,
                "UBUNTU_CODENAME" => ubuntu_codename = value,
                "VERSION_ID" => version_id = value,
                _ => {}
            }
        }

        let os_family = std::iter::once(id.as_str())
            .chain(id_like.split_whitespace())
            .find_map(family_for_release_id)
            .unwrap_or_else(|| OsFamily::from(id.clone()));

        if codename.is_empty() {
            codename = ubuntu_codename;
        }

        let major = version_id
            .split('.')
            .next()
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        Self {
            operating_system: operating_system_for_release_id(&id),
            os_family,
            distribution_codename: codename,
            os_major_release: major,
        }
    }

    /// Detect facts for the current host from `/etc/os-release`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn detect() -> anyhow::Result<Self> {
        Self::detect_from(Path::new("/etc/os-release"))
    }

    /// Detect facts from an arbitrary `os-release` style file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn detect_from(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context as _;
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(Self::from_os_release(&content))
    }
}

fn family_for_release_id(id: &str) -> Option<OsFamily> {
    match id {
        "rhel" | "centos" | "fedora" | "scientific" | "amzn" | "rocky" | "almalinux" | "ol" => {
            Some(OsFamily::RedHat)
        }
        "debian" | "ubuntu" => Some(OsFamily::Debian),
        "suse" | "sles" | "opensuse" | "opensuse-leap" | "opensuse-tumbleweed" => {
            Some(OsFamily::Suse)
        }
        _ => None,
    }
}

fn operating_system_for_release_id(id: &str) -> String {
    let name = match id {
        "rhel" => "RedHat",
        "centos" => "CentOS",
        "fedora" => "Fedora",
        "scientific" => "Scientific",
        "amzn" => "Amazon",
        "debian" => "Debian",
        "ubuntu" => "Ubuntu",
        "sles" => "SLES",
        "opensuse" | "opensuse-leap" | "opensuse-tumbleweed" => "OpenSuSE",
        other => other,
    };
    name.to_string()
}

/// Platform class a set of facts resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// yum-based systems.
    RedHat,
    /// apt-based systems.
    Debian,
    /// zypper-based systems.
    Suse,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedHat => write!(f, "redhat"),
            Self::Debian => write!(f, "debian"),
            Self::Suse => write!(f, "suse"),
        }
    }
}

impl Platform {
    /// Resolve facts to a supported platform.
    ///
    /// Amazon Linux reported with the generic `Linux` family (fact gatherers
    /// older than facter 1.7.2) is treated as RedHat.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError`] for any unsupported combination.
    pub fn classify(facts: &Facts) -> Result<Self, ClassificationError> {
        match &facts.os_family {
            OsFamily::RedHat => Ok(Self::RedHat),
            OsFamily::Debian => Ok(Self::Debian),
            OsFamily::Suse => Ok(Self::Suse),
            OsFamily::Linux if facts.is_os("Amazon") => Ok(Self::RedHat),
            OsFamily::Linux | OsFamily::Other(_) | OsFamily::Unknown => {
                Err(ClassificationError::new(&facts.operating_system))
            }
        }
    }
}
