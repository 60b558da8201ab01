//! Command: select and print the resources nginx needs.
use anyhow::{Context as _, Result};

use crate::cli::{Format, SelectOpts};
use crate::config::{self, Options};
use crate::logging;
use crate::package;
use crate::platform::{Facts, OsFamily};
use crate::resources::ResourceSet;

/// Run the select command.
///
/// # Errors
///
/// Returns an error if facts or options cannot be loaded, the host is not
/// supported, or the resource set cannot be rendered.
pub fn run(opts: &SelectOpts) -> Result<()> {
    logging::stage("Resolving facts");
    let facts = resolve_facts(opts)?;
    tracing::info!(
        "{} ({}) codename '{}'",
        facts.operating_system,
        facts.os_family,
        facts.distribution_codename
    );

    logging::stage("Resolving options");
    let options = resolve_options(opts)?;
    tracing::debug!(
        "manage_repo={} package_source={} package={} ({})",
        options.manage_repo,
        options.package_source,
        options.package_name,
        options.package_ensure
    );

    logging::stage("Selecting resources");
    let resources = package::select(&facts, &options)?;
    tracing::info!(
        "{} packages, {} repositories",
        resources.packages().count(),
        resources.repositories().count()
    );

    println!("{}", render(&resources, opts.format)?);
    Ok(())
}

/// Build facts from `--facts`/`--detect`, then apply per-fact overrides.
///
/// # Errors
///
/// Returns an error if the facts file or `/etc/os-release` cannot be read.
pub fn resolve_facts(opts: &SelectOpts) -> Result<Facts> {
    let mut facts = if let Some(path) = &opts.facts {
        config::load_facts(path).with_context(|| format!("loading facts from {}", path.display()))?
    } else if opts.detect {
        Facts::detect()?
    } else {
        Facts::default()
    };

    if let Some(os) = &opts.operating_system {
        facts.operating_system.clone_from(os);
    }
    if let Some(family) = &opts.os_family {
        facts.os_family = OsFamily::from(family.clone());
    }
    if let Some(codename) = &opts.distribution_codename {
        facts.distribution_codename.clone_from(codename);
    }
    if let Some(release) = &opts.os_major_release {
        facts.os_major_release = Some(release.clone());
    }
    Ok(facts)
}

/// Load options from `--options`, then apply flag overrides.
///
/// # Errors
///
/// Returns an error if the options file cannot be read or parsed.
pub fn resolve_options(opts: &SelectOpts) -> Result<Options> {
    let mut options = match &opts.options {
        Some(path) => config::load_options(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => Options::default(),
    };

    if opts.no_manage_repo {
        options.manage_repo = false;
    }
    if let Some(source) = opts.package_source {
        options.package_source = source;
    }
    if let Some(name) = &opts.package_name {
        options.package_name.clone_from(name);
    }
    if let Some(ensure) = opts.package_ensure {
        options.package_ensure = ensure;
    }
    Ok(options)
}

/// Render a resource set in the requested format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(resources: &ResourceSet, format: Format) -> Result<String> {
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(resources)?,
        Format::Toml => toml::to_string(resources)?,
        Format::Text => resources
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(rendered)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::PackageSource;

    fn redhat_opts() -> SelectOpts {
        SelectOpts {
            operating_system: Some("CentOS".to_string()),
            os_family: Some("RedHat".to_string()),
            distribution_codename: Some("6".to_string()),
            ..SelectOpts::default()
        }
    }

    #[test]
    fn flags_build_facts_without_file() {
        let facts = resolve_facts(&redhat_opts()).unwrap();
        assert_eq!(facts.operating_system, "CentOS");
        assert_eq!(facts.os_family, OsFamily::RedHat);
    }

    #[test]
    fn flags_override_facts_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facts.toml");
        std::fs::write(&path, "operatingsystem = \"Debian\"\nosfamily = \"Debian\"\nlsbdistcodename = \"wheezy\"\n").unwrap();
        let opts = SelectOpts {
            facts: Some(path),
            distribution_codename: Some("jessie".to_string()),
            ..SelectOpts::default()
        };
        let facts = resolve_facts(&opts).unwrap();
        assert_eq!(facts.operating_system, "Debian");
        assert_eq!(facts.distribution_codename, "jessie");
    }

    #[test]
    fn flags_override_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.toml");
        std::fs::write(&path, "package_source = \"passenger\"\n").unwrap();
        let opts = SelectOpts {
            options: Some(path),
            no_manage_repo: true,
            ..SelectOpts::default()
        };
        let options = resolve_options(&opts).unwrap();
        assert_eq!(options.package_source, PackageSource::Passenger);
        assert!(!options.manage_repo);
    }

    #[test]
    fn render_text_one_line_per_resource() {
        let facts = resolve_facts(&redhat_opts()).unwrap();
        let set = package::select(&facts, &Options::default()).unwrap();
        let text = render(&set, Format::Text).unwrap();
        insta::assert_snapshot!(text, @r"
        package gd (present)
        package libXpm (present)
        package libxslt (present)
        package nginx (present)
        yum repository nginx-release -> http://nginx.org/packages/rhel/$releasever/$basearch/
        ");
    }

    #[test]
    fn render_json_is_parseable() {
        let facts = resolve_facts(&redhat_opts()).unwrap();
        let set = package::select(&facts, &Options::default()).unwrap();
        let json = render(&set, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["packages"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn unsupported_host_is_an_error() {
        let opts = SelectOpts {
            operating_system: Some("xxx".to_string()),
            ..SelectOpts::default()
        };
        let err = run(&opts).unwrap_err();
        assert!(err.to_string().contains("Module nginx is not supported on xxx"));
    }
}
