use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::PackageSource;
use crate::resources::PackageEnsure;

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "nginx-package",
    about = "Select the packages and repositories needed to install nginx",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resources nginx needs on a host
    Select(SelectOpts),
    /// Print version information
    Version,
}

/// Output format for the `select` subcommand.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// TOML with `[[packages]]` and `[[repositories]]` tables.
    Toml,
    /// One resource per line.
    Text,
}

/// Options for the `select` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct SelectOpts {
    /// Read facts from a TOML or JSON file
    #[arg(long, conflicts_with = "detect")]
    pub facts: Option<PathBuf>,

    /// Derive facts from /etc/os-release
    #[arg(long)]
    pub detect: bool,

    /// Override the `operatingsystem` fact
    #[arg(long = "operatingsystem")]
    pub operating_system: Option<String>,

    /// Override the `osfamily` fact
    #[arg(long = "osfamily")]
    pub os_family: Option<String>,

    /// Override the `lsbdistcodename` fact
    #[arg(long = "lsbdistcodename")]
    pub distribution_codename: Option<String>,

    /// Override the `operatingsystemmajrelease` fact
    #[arg(long = "operatingsystemmajrelease")]
    pub os_major_release: Option<String>,

    /// Read options from a TOML file
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Do not register vendor repositories
    #[arg(long)]
    pub no_manage_repo: bool,

    /// Package archive for Debian-family hosts (nginx, passenger)
    #[arg(long)]
    pub package_source: Option<PackageSource>,

    /// Name of the nginx package
    #[arg(long)]
    pub package_name: Option<String>,

    /// Desired package state (present, latest, absent)
    #[arg(long)]
    pub package_ensure: Option<PackageEnsure>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}
