//! Declarative resource descriptors produced by the selector.
//!
//! Resources describe desired state only; applying them is left to the
//! package manager and repository writer that consume a [`ResourceSet`].
pub mod package;
pub mod repository;

use std::collections::BTreeSet;
use std::fmt;

use serde::ser::SerializeStruct as _;
use serde::{Serialize, Serializer};

pub use package::{PackageEnsure, PackageResource};
pub use repository::{RepositoryKind, RepositorySource};

/// A single declarative unit of desired system state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Resource {
    /// A package to install or remove.
    Package(PackageResource),
    /// A repository to register.
    Repository(RepositorySource),
}

impl Resource {
    /// Resource name (package name or repository name).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Package(p) => &p.name,
            Self::Repository(r) => &r.name,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Package(p) => fmt::Display::fmt(p, f),
            Self::Repository(r) => fmt::Display::fmt(r, f),
        }
    }
}

impl From<PackageResource> for Resource {
    fn from(p: PackageResource) -> Self {
        Self::Package(p)
    }
}

impl From<RepositorySource> for Resource {
    fn from(r: RepositorySource) -> Self {
        Self::Repository(r)
    }
}

/// An unordered bag of resources, frozen once built.
///
/// Backed by a [`BTreeSet`] so iteration and serialized output are stable.
///
/// # Examples
///
/// ```
/// use nginx_package::resources::{PackageResource, ResourceSet};
///
/// let set: ResourceSet = [PackageResource::present("nginx"), PackageResource::present("gd")]
///     .into_iter()
///     .collect();
///
/// assert!(set.contains_package("nginx"));
/// assert!(!set.contains_repository("nginx-release"));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSet {
    resources: BTreeSet<Resource>,
}

impl ResourceSet {
    /// Number of resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Iterate over every resource in stable order.
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    /// Iterate over package resources.
    pub fn packages(&self) -> impl Iterator<Item = &PackageResource> {
        self.resources.iter().filter_map(|r| match r {
            Resource::Package(p) => Some(p),
            Resource::Repository(_) => None,
        })
    }

    /// Iterate over repository resources.
    pub fn repositories(&self) -> impl Iterator<Item = &RepositorySource> {
        self.resources.iter().filter_map(|r| match r {
            Resource::Repository(repo) => Some(repo),
            Resource::Package(_) => None,
        })
    }

    /// Look up a package by name.
    #[must_use]
    pub fn package(&self, name: &str) -> Option<&PackageResource> {
        self.packages().find(|p| p.name == name)
    }

    /// Look up a repository by name.
    #[must_use]
    pub fn repository(&self, name: &str) -> Option<&RepositorySource> {
        self.repositories().find(|r| r.name == name)
    }

    /// Whether a package with this name is present.
    #[must_use]
    pub fn contains_package(&self, name: &str) -> bool {
        self.package(name).is_some()
    }

    /// Whether a repository with this name is present.
    #[must_use]
    pub fn contains_repository(&self, name: &str) -> bool {
        self.repository(name).is_some()
    }

    /// Package names in stable order.
    #[must_use]
    pub fn package_names(&self) -> Vec<&str> {
        self.packages().map(|p| p.name.as_str()).collect()
    }
}

impl<R: Into<Resource>> FromIterator<R> for ResourceSet {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            resources: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResourceSet {
    type Item = &'a Resource;
    type IntoIter = std::collections::btree_set::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}

impl Serialize for ResourceSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let packages: Vec<&PackageResource> = self.packages().collect();
        let repositories: Vec<&RepositorySource> = self.repositories().collect();
        let mut state = serializer.serialize_struct("ResourceSet", 2)?;
        state.serialize_field("packages", &packages)?;
        state.serialize_field("repositories", &repositories)?;
        state.end()
    }
}

/// Accumulates resources before freezing them into a [`ResourceSet`].
#[derive(Debug, Default)]
pub struct ResourceSetBuilder {
    resources: BTreeSet<Resource>,
}

impl ResourceSetBuilder {
    /// Start an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource.
    pub fn add(&mut self, resource: impl Into<Resource>) -> &mut Self {
        let resource = resource.into();
        tracing::debug!("emit {resource}");
        self.resources.insert(resource);
        self
    }

    /// Freeze the accumulated resources.
    #[must_use]
    pub fn build(self) -> ResourceSet {
        ResourceSet {
            resources: self.resources,
        }
    }
}
