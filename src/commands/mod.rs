//! Top-level subcommand handlers.
pub mod select;
pub mod version;
