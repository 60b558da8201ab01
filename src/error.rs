//! Domain-specific error types.
//!
//! Library code returns typed errors built with [`thiserror`]; the CLI
//! converts them to [`anyhow::Error`] at the command boundary via `?`.
//!
//! # Error hierarchy
//!
//! ```text
//! NginxPackageError
//! ├── Classification(ClassificationError) — unsupported operating system
//! └── Config(ConfigError)                 — facts/options loading and validation
//! ```

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Error, Debug)]
pub enum NginxPackageError {
    /// The supplied facts match no supported platform.
    #[error(transparent)]
    Classification(#[from] ClassificationError),

    /// Facts or options could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Raised when facts match no supported platform rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Module nginx is not supported on {operating_system}")]
pub struct ClassificationError {
    /// The offending `operatingsystem` fact.
    pub operating_system: String,
}

impl ClassificationError {
    /// Create an error naming the unsupported operating system.
    #[must_use]
    pub fn new(operating_system: &str) -> Self {
        Self {
            operating_system: operating_system.to_string(),
        }
    }
}

/// Errors that arise from loading facts and options.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading a file.
    #[error("IO error reading {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file contents could not be parsed.
    #[error("Invalid syntax in {path}: {message}")]
    InvalidSyntax {
        /// Path to the offending file.
        path: String,
        /// Parser message.
        message: String,
    },

    /// An option holds a value outside its allowed set.
    #[error("Invalid value '{value}' for {option}: expected one of {expected}")]
    InvalidValue {
        /// Option name.
        option: String,
        /// Rejected value.
        value: String,
        /// Human-readable list of accepted values.
        expected: String,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn classification_error_display() {
        let e = ClassificationError::new("xxx");
        assert_eq!(e.to_string(), "Module nginx is not supported on xxx");
    }

    #[test]
    fn classification_error_keeps_original_case() {
        let e = ClassificationError::new("Solaris");
        assert!(e.to_string().ends_with("on Solaris"));
        assert_eq!(e.operating_system, "Solaris");
    }

    #[test]
    fn config_error_io_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::Io {
            path: "/etc/nginx-package/facts.toml".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.to_string().contains("/etc/nginx-package/facts.toml"));
        assert!(e.source().is_some());
    }

    #[test]
    fn config_error_invalid_syntax_display() {
        let e = ConfigError::InvalidSyntax {
            path: "options.toml".to_string(),
            message: "expected `=`".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid syntax in options.toml: expected `=`");
    }

    #[test]
    fn config_error_invalid_value_display() {
        let e = ConfigError::InvalidValue {
            option: "package_source".to_string(),
            value: "ppa".to_string(),
            expected: "nginx, passenger".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid value 'ppa' for package_source: expected one of nginx, passenger"
        );
    }

    #[test]
    fn top_level_classification_is_transparent() {
        let e: NginxPackageError = ClassificationError::new("xxx").into();
        assert_eq!(e.to_string(), "Module nginx is not supported on xxx");
    }

    #[test]
    fn top_level_from_config_error() {
        let e: NginxPackageError = ConfigError::InvalidValue {
            option: "package_ensure".to_string(),
            value: "maybe".to_string(),
            expected: "present, latest, absent".to_string(),
        }
        .into();
        assert!(e.to_string().starts_with("Configuration error"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<NginxPackageError>();
        assert_send_sync::<ClassificationError>();
        assert_send_sync::<ConfigError>();
    }

    #[test]
    fn errors_convert_to_anyhow() {
        let _a: anyhow::Error = ClassificationError::new("xxx").into();
        let _b: anyhow::Error = NginxPackageError::from(ClassificationError::new("xxx")).into();
    }
}
