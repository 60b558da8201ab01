//! Fact-driven nginx package selection.
//!
//! Given operating system facts and a few user options, decide which
//! packages to install and which package repositories to register so that
//! nginx can be installed on RedHat-, Debian- and SUSE-family hosts.
//!
//! - **[`platform`]** — host facts and platform classification
//! - **[`config`]** — user options and facts file loading
//! - **[`resources`]** — declarative package and repository descriptors
//! - **[`package`]** — the selector itself ([`package::select`])
//! - **[`commands`]** — CLI subcommand handlers
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod package;
pub mod platform;
pub mod resources;

pub use error::{ClassificationError, NginxPackageError};
pub use package::select;
