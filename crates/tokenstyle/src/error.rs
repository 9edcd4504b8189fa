//! Error types for adapter construction and configuration loading.
//!
//! [`AdapterError`] covers every way building an [`Adapter`](crate::Adapter)
//! can fail. These are configuration mistakes: construction is all-or-nothing
//! and nothing is retried. [`ConfigError`] covers reading a configuration
//! from YAML or JSON before construction starts.
//!
//! Value-level misses are not errors. A path lookup that finds nothing returns
//! the fallback, a responsive selection with no qualifying breakpoint returns
//! `None`, and the validator answers `false`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing an adapter bundle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The `themes` mapping was empty.
    #[error("at least one theme required")]
    MissingThemes,

    /// No `breakpoints` mapping was supplied.
    #[error("breakpoints configuration required")]
    MissingBreakpoints,

    /// The breakpoint mapping has no entry equal to exactly 0.
    #[error("a zero breakpoint is required")]
    MissingZeroBreakpoint,

    /// A named theme does not have the required token structure.
    #[error("invalid theme structure: '{name}'")]
    InvalidThemeStructure {
        /// Key of the offending theme in the `themes` mapping.
        name: String,
    },

    /// A bundle operation referenced a theme name the bundle does not hold.
    #[error("unknown theme: '{name}'")]
    UnknownTheme { name: String },
}

/// Errors raised while loading an adapter configuration or theme overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid YAML/JSON or does not have the expected shape.
    #[error("{}", format_parse(.path.as_ref(), .message))]
    Parse {
        /// Source file, when loaded from disk.
        path: Option<PathBuf>,
        /// Message from the underlying parser.
        message: String,
    },

    /// The file extension is not one of the supported formats.
    #[error("unsupported configuration format: {} (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

fn format_parse(path: Option<&PathBuf>, message: &str) -> String {
    match path {
        Some(p) => format!("failed to parse {}: {}", p.display(), message),
        None => format!("failed to parse configuration: {}", message),
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            path: None,
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            path: None,
            message: err.to_string(),
        }
    }
}

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;
