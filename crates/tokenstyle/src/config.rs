//! Loading adapter configuration from YAML and JSON.
//!
//! The file shape is the caller input shape of [`create_adapter`](crate::create_adapter):
//!
//! ```yaml
//! themes:
//!   light:
//!     colors: { primary: "#007AFF", ... }
//!     spacing: { xs: 4, sm: 8, md: 16, lg: 24, xl: 32 }
//!     typography:
//!       fontSize: { sm: 12, md: 14, lg: 18, xl: 24 }
//! breakpoints:
//!   xs: 0
//!   md: 768
//! settings:
//!   adaptiveThemes: true
//! ```
//!
//! Loading only parses. Theme structure and breakpoint rules are checked when
//! the adapter is built, so a file that parses can still fail construction.
//! Breakpoint order in the file is preserved until normalization.
//!
//! # Supported Extensions
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.yaml`   | YAML   |
//! | `.yml`    | YAML   |
//! | `.json`   | JSON   |

use std::path::Path;

use crate::adapter::AdapterConfig;
use crate::error::ConfigError;
use crate::theme::ThemeOverrides;

/// Recognized configuration file extensions.
pub const CONFIG_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension, if it is a supported one.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    fn parse<T: serde::de::DeserializeOwned>(self, content: &str) -> Result<T, ConfigError> {
        match self {
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            ConfigFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }
}

impl AdapterConfig {
    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Yaml.parse(yaml)
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Json.parse(json)
    }

    /// Loads a configuration file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnsupportedFormat`] for an unknown extension
    /// - [`ConfigError::Io`] if the file cannot be read
    /// - [`ConfigError::Parse`] (carrying the path) if parsing fails
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = AdapterConfig::from_file("./design/tokens.yaml")?;
    /// let adapter = config.build()?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        load(path.as_ref())
    }
}

impl ThemeOverrides {
    /// Loads theme overrides from a YAML or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        load(path.as_ref())
    }
}

fn load<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), ?format, "loading configuration");

    format.parse(&content).map_err(|err| match err {
        ConfigError::Parse { message, .. } => ConfigError::Parse {
            path: Some(path.to_path_buf()),
            message,
        },
        other => other,
    })
}
