//! SUSE-family resources.
use super::nginx_package;
use crate::config::Options;
use crate::resources::{PackageResource, ResourceSetBuilder};

/// Emit nginx and gd. SUSE ships nginx in its own repositories, so no
/// repository is registered and `manage_repo` has no effect.
pub fn emit(options: &Options, out: &mut ResourceSetBuilder) {
    out.add(nginx_package(options));
    out.add(PackageResource::present("gd"));
}
