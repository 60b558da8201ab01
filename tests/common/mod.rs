// Shared helpers for integration tests.
//
// Builds facts the way the fact gatherer reports them and runs the selector,
// so each test reads as a single platform scenario.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use nginx_package::config::{Options, PackageSource};
use nginx_package::platform::{Facts, OsFamily};
use nginx_package::resources::ResourceSet;

/// RedHat-family operating systems that get the nginx.org repository.
pub const REDHAT_SYSTEMS: [&str; 5] = ["centos", "rhel", "redhat", "scientific", "amazon"];

/// Debian-family operating systems.
pub const DEBIAN_SYSTEMS: [&str; 2] = ["debian", "ubuntu"];

/// SUSE-family operating systems.
pub const SUSE_SYSTEMS: [&str; 2] = ["opensuse", "suse"];

/// Packages every RedHat-family host receives.
pub const REDHAT_PACKAGES: [&str; 4] = ["nginx", "gd", "libXpm", "libxslt"];

/// Facts as reported for a RedHat-family host.
pub fn redhat(os: &str) -> Facts {
    Facts::new(os, OsFamily::RedHat, "6")
}

/// Facts as reported for a Debian-family host.
pub fn debian(os: &str, codename: &str) -> Facts {
    Facts::new(os, OsFamily::Debian, codename)
}

/// Facts as reported for a SUSE-family host.
pub fn suse(os: &str) -> Facts {
    Facts::new(os, OsFamily::Suse, "Celadon")
}

/// Options with repository management turned off.
pub fn no_repo() -> Options {
    Options {
        manage_repo: false,
        ..Options::default()
    }
}

/// Options selecting the Passenger archive.
pub fn passenger() -> Options {
    Options {
        package_source: PackageSource::Passenger,
        ..Options::default()
    }
}

/// Run the selector, panicking with the facts on failure.
pub fn select(facts: &Facts, options: &Options) -> ResourceSet {
    nginx_package::select(facts, options)
        .unwrap_or_else(|e| panic!("selection failed for {facts:?}: {e}"))
}
