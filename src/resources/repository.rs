//! Package repository descriptors (yum repositories and apt sources).
use std::fmt;

use serde::{Deserialize, Serialize};

/// Repository backend the source is registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryKind {
    /// A `yumrepo` definition under `/etc/yum.repos.d`.
    Yum,
    /// An `apt::source` entry under `/etc/apt/sources.list.d`.
    Apt,
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yum => write!(f, "yum"),
            Self::Apt => write!(f, "apt"),
        }
    }
}

/// A package repository to register with the system package manager.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RepositorySource {
    /// Repository name (file stem of the generated repository definition).
    pub name: String,
    /// Backend.
    pub kind: RepositoryKind,
    /// Base URL (yum) or archive location (apt).
    pub location: String,
    /// Whether the repository is enabled.
    pub enabled: bool,
    /// Whether package signatures are verified.
    pub gpg_check: bool,
    /// URL of the signing key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpg_key: Option<String>,
    /// apt release (distribution codename).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    /// apt components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repos: Option<String>,
    /// yum description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RepositorySource {
    /// An enabled, signature-checked yum repository.
    #[must_use]
    pub fn yum(name: &str, baseurl: &str, description: &str, gpg_key: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: RepositoryKind::Yum,
            location: baseurl.to_string(),
            enabled: true,
            gpg_check: true,
            gpg_key: Some(gpg_key.to_string()),
            release: None,
            repos: None,
            description: Some(description.to_string()),
        }
    }

    /// An enabled apt source. An empty `release` is left unset.
    #[must_use]
    pub fn apt(name: &str, location: &str, release: &str, repos: &str, gpg_key: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: RepositoryKind::Apt,
            location: location.to_string(),
            enabled: true,
            gpg_check: true,
            gpg_key: Some(gpg_key.to_string()),
            release: (!release.is_empty()).then(|| release.to_string()),
            repos: Some(repos.to_string()),
            description: None,
        }
    }
}

impl fmt::Display for RepositorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} repository {} -> {}", self.kind, self.name, self.location)?;
        if let Some(release) = &self.release {
            write!(f, " {release}")?;
        }
        if let Some(repos) = &self.repos {
            write!(f, " {repos}")?;
        }
        if !self.enabled {
            write!(f, " (disabled)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yum_repository_defaults() {
        let r = RepositorySource::yum("nginx-release", "http://example/", "nginx repo", "http://k");
        assert_eq!(r.kind, RepositoryKind::Yum);
        assert!(r.enabled);
        assert!(r.gpg_check);
        assert_eq!(r.description.as_deref(), Some("nginx repo"));
        assert!(r.release.is_none());
    }

    #[test]
    fn apt_source_empty_release_is_unset() {
        let r = RepositorySource::apt("nginx", "http://example/debian", "", "nginx", "http://k");
        assert_eq!(r.kind, RepositoryKind::Apt);
        assert!(r.release.is_none());
        assert_eq!(r.repos.as_deref(), Some("nginx"));
    }

    #[test]
    fn display_apt_source() {
        let r = RepositorySource::apt("nginx", "http://example/debian", "wheezy", "nginx", "k");
        assert_eq!(
            r.to_string(),
            "apt repository nginx -> http://example/debian wheezy nginx"
        );
    }
}
