//! RedHat-family resources: yum packages plus the nginx.org yum repository.
use super::{NGINX_SIGNING_KEY, nginx_package};
use crate::config::Options;
use crate::platform::Facts;
use crate::resources::{PackageResource, RepositorySource, ResourceSetBuilder};

/// Name of the nginx.org yum repository.
pub const REPOSITORY_NAME: &str = "nginx-release";

/// Libraries nginx links against that are not pulled in automatically.
pub const SUPPORT_PACKAGES: [&str; 3] = ["gd", "libXpm", "libxslt"];

/// Emit the RedHat-family resource subset.
///
/// nginx.org publishes no Fedora packages, so Fedora never gets the
/// repository even when `manage_repo` is set.
pub fn emit(facts: &Facts, options: &Options, out: &mut ResourceSetBuilder) {
    out.add(nginx_package(options));
    for name in SUPPORT_PACKAGES {
        out.add(PackageResource::present(name));
    }

    if facts.is_os("Fedora") {
        tracing::debug!("no nginx.org repository for Fedora");
    } else if options.manage_repo {
        out.add(repository(facts));
    }
}

/// The nginx.org yum repository for the host's major release.
///
/// Without a known major release the baseurl defers to yum's `$releasever`.
#[must_use]
pub fn repository(facts: &Facts) -> RepositorySource {
    let release = facts
        .os_major_release
        .as_deref()
        .filter(|r| !r.is_empty())
        .unwrap_or("$releasever");
    let baseurl = format!("http://nginx.org/packages/rhel/{release}/$basearch/");
    RepositorySource::yum(REPOSITORY_NAME, &baseurl, "nginx repo", NGINX_SIGNING_KEY)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::platform::OsFamily;
    use crate::resources::RepositoryKind;

    fn emit_for(facts: &Facts, options: &Options) -> crate::resources::ResourceSet {
        let mut b = ResourceSetBuilder::new();
        emit(facts, options, &mut b);
        b.build()
    }

    #[test]
    fn baseurl_uses_major_release() {
        let facts = Facts::new("CentOS", OsFamily::RedHat, "").with_major_release("7");
        let repo = repository(&facts);
        assert_eq!(repo.location, "http://nginx.org/packages/rhel/7/$basearch/");
        assert_eq!(repo.kind, RepositoryKind::Yum);
        assert_eq!(repo.gpg_key.as_deref(), Some(NGINX_SIGNING_KEY));
    }

    #[test]
    fn baseurl_falls_back_to_releasever() {
        let facts = Facts::new("CentOS", OsFamily::RedHat, "6");
        assert_eq!(
            repository(&facts).location,
            "http://nginx.org/packages/rhel/$releasever/$basearch/"
        );
    }

    #[test]
    fn fedora_lowercase_still_skips_repository() {
        let facts = Facts::new("fedora", OsFamily::RedHat, "");
        let set = emit_for(&facts, &Options::default());
        assert!(!set.contains_repository(REPOSITORY_NAME));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn emits_four_packages_and_one_repository() {
        let facts = Facts::new("Scientific", OsFamily::RedHat, "6");
        let set = emit_for(&facts, &Options::default());
        assert_eq!(set.packages().count(), 4);
        assert_eq!(set.repositories().count(), 1);
    }
}
