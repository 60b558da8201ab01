//! nginx package selection.
//!
//! [`select`] classifies the host facts into a [`Platform`] and dispatches to
//! the matching platform module, which emits the packages and repositories
//! that platform needs. The function is pure: the same facts and options
//! always yield the same [`ResourceSet`].
pub mod debian;
pub mod redhat;
pub mod suse;

use crate::config::Options;
use crate::error::ClassificationError;
use crate::platform::{Facts, Platform};
use crate::resources::{PackageResource, ResourceSet, ResourceSetBuilder};

/// Key nginx.org signs its packages with.
pub const NGINX_SIGNING_KEY: &str = "http://nginx.org/keys/nginx_signing.key";

/// Select the resources needed to install nginx on the described host.
///
/// # Errors
///
/// Returns [`ClassificationError`] when the facts match no supported
/// platform.
///
/// # Examples
///
/// ```
/// use nginx_package::config::Options;
/// use nginx_package::package::select;
/// use nginx_package::platform::{Facts, OsFamily};
///
/// let facts = Facts::new("CentOS", OsFamily::RedHat, "6");
/// let resources = select(&facts, &Options::default()).unwrap();
/// assert!(resources.contains_package("libXpm"));
/// assert!(resources.contains_repository("nginx-release"));
///
/// let err = select(&Facts::new("xxx", OsFamily::Unknown, ""), &Options::default()).unwrap_err();
/// assert_eq!(err.to_string(), "Module nginx is not supported on xxx");
/// ```
pub fn select(facts: &Facts, options: &Options) -> Result<ResourceSet, ClassificationError> {
    let platform = Platform::classify(facts)?;
    tracing::debug!(
        "classified {} (family {}) as {platform}",
        facts.operating_system,
        facts.os_family
    );

    let mut builder = ResourceSetBuilder::new();
    match platform {
        Platform::RedHat => redhat::emit(facts, options, &mut builder),
        Platform::Debian => debian::emit(facts, options, &mut builder),
        Platform::Suse => suse::emit(options, &mut builder),
    }
    Ok(builder.build())
}

/// The main nginx package, honoring the configured name and ensure state.
fn nginx_package(options: &Options) -> PackageResource {
    PackageResource::new(&options.package_name, options.package_ensure)
}
