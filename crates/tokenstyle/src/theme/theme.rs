//! The [`Theme`] struct.
//!
//! A theme is a named bundle of design tokens. Three sections are mandatory
//! (`colors`, `spacing`, `typography`) and are modeled as typed fields, so a
//! `Theme` value is structurally valid by construction. Anything else at the
//! top level (`shadows`, `radii`, ...) is kept as an open extension.
//!
//! # Construction
//!
//! Programmatic:
//!
//! ```rust
//! use tokenstyle::{Colors, FontSizes, Spacing, Theme, Typography};
//! use serde_json::json;
//!
//! let theme = Theme::new(
//!     Colors::new("#007AFF", "#5856D6", "#FFFFFF", "#F2F2F7", "#000000", "#8E8E93"),
//!     Spacing::new(4.0, 8.0, 16.0, 24.0, 32.0),
//!     Typography::new(FontSizes::new(12.0, 14.0, 18.0, 24.0)),
//! )
//! .with_extension("radii", json!({ "sm": 4, "lg": 12 }));
//!
//! assert_eq!(theme.colors.primary, "#007AFF");
//! ```
//!
//! From YAML:
//!
//! ```rust
//! use tokenstyle::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! colors:
//!   primary: "#007AFF"
//!   secondary: "#5856D6"
//!   background: "#FFFFFF"
//!   surface: "#F2F2F7"
//!   text: "#000000"
//!   textSecondary: "#8E8E93"
//! spacing: { xs: 4, sm: 8, md: 16, lg: 24, xl: 32 }
//! typography:
//!   fontSize: { sm: 12, md: 14, lg: 18, xl: 24 }
//! "##).unwrap();
//!
//! assert_eq!(theme.spacing.md, 16.0);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::merge::{merge_themes, ThemeOverrides};
use super::tokens::{Colors, Spacing, Typography};
use crate::error::ConfigError;

/// Top-level keys with a typed representation; they cannot be extensions.
pub(crate) const SECTIONS: [&str; 3] = ["colors", "spacing", "typography"];

/// A validated set of design tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: Colors,
    pub spacing: Spacing,
    pub typography: Typography,
    /// Open top-level sections (shadows, radii, ...).
    #[serde(flatten)]
    extensions: Map<String, Value>,
}

impl Theme {
    /// Creates a theme from its three mandatory sections.
    pub fn new(colors: Colors, spacing: Spacing, typography: Typography) -> Self {
        Self {
            colors,
            spacing,
            typography,
            extensions: Map::new(),
        }
    }

    /// Parses a theme from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the YAML is malformed or a required
    /// token is missing or has the wrong type.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a theme from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds an extension section, returning `self` for chaining.
    ///
    /// The mandatory section names are ignored here; set those through the
    /// typed fields instead.
    pub fn with_extension(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set_extension(name, value.into());
        self
    }

    pub(crate) fn set_extension(&mut self, name: &str, value: Value) {
        if SECTIONS.contains(&name) {
            tracing::warn!(section = name, "ignoring extension that shadows a theme section");
            return;
        }
        self.extensions.insert(name.to_string(), value);
    }

    /// Returns an extension section by name.
    pub fn extension(&self, name: &str) -> Option<&Value> {
        self.extensions.get(name)
    }

    /// All extension sections.
    pub fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }

    /// Returns a new theme with `overrides` merged on top of this one.
    ///
    /// See [`merge_themes`] for the merge policy.
    pub fn merged(&self, overrides: &ThemeOverrides) -> Theme {
        merge_themes(self, overrides)
    }

    /// Serializes the theme into its JSON token shape.
    ///
    /// Every field serializes to JSON (non-finite numbers become `null`), so
    /// the `Value::Null` arm is not reached in practice; it is logged if it is.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "theme could not be serialized");
            Value::Null
        })
    }
}

impl From<Theme> for Value {
    fn from(theme: Theme) -> Self {
        theme.to_value()
    }
}

impl From<&Theme> for Value {
    fn from(theme: &Theme) -> Self {
        theme.to_value()
    }
}
