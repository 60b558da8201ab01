//! Debian-family resources: the nginx package plus one apt source.
use super::{NGINX_SIGNING_KEY, nginx_package};
use crate::config::{Options, PackageSource};
use crate::platform::Facts;
use crate::resources::{PackageResource, RepositorySource, ResourceSetBuilder};

/// Phusion's Passenger apt archive.
pub const PASSENGER_LOCATION: &str = "https://oss-binaries.phusionpassenger.com/apt/passenger";

/// Key Phusion signs the Passenger archive with.
pub const PASSENGER_SIGNING_KEY: &str =
    "https://oss-binaries.phusionpassenger.com/auto-software-signing-gpg-key.txt";

/// Emit the Debian-family resource subset.
///
/// The nginx.org and Passenger sources are mutually exclusive. With
/// `manage_repo` off no apt source is registered at all.
pub fn emit(facts: &Facts, options: &Options, out: &mut ResourceSetBuilder) {
    out.add(nginx_package(options));

    if options.package_source == PackageSource::Passenger {
        out.add(PackageResource::present("passenger"));
        out.add(PackageResource::present("apt-transport-https"));
    }

    if !options.manage_repo {
        tracing::debug!("repository management disabled; no apt source");
        return;
    }

    let release = facts.distribution_codename.to_lowercase();
    let source = match options.package_source {
        PackageSource::Nginx => RepositorySource::apt(
            "nginx",
            &format!("http://nginx.org/packages/{}", distro(facts)),
            &release,
            "nginx",
            NGINX_SIGNING_KEY,
        ),
        PackageSource::Passenger => RepositorySource::apt(
            "passenger",
            PASSENGER_LOCATION,
            &release,
            "main",
            PASSENGER_SIGNING_KEY,
        ),
    };
    out.add(source);
}

/// nginx.org archive path segment; Ubuntu has its own tree, everything
/// else uses Debian's.
fn distro(facts: &Facts) -> &'static str {
    if facts.is_os("Ubuntu") {
        "ubuntu"
    } else {
        "debian"
    }
}
