//! Merging partial overrides onto a base theme.
//!
//! The merge is per section, not a recursive deep merge:
//!
//! - `colors`, `spacing` and `typography` merge key by key. Keys present in
//!   the overrides win; keys only in the base are kept.
//! - Inside `typography`, the `fontSize`, `fontWeight`, `lineHeight` and
//!   `fontFamily` sub-sections also merge key by key. Any other typography
//!   entry is replaced as a whole.
//! - Every other top-level section is replaced as a whole when the overrides
//!   carry it. A custom `shadows` object in the overrides replaces the base
//!   `shadows` object entirely; its keys are not merged.
//!
//! ```rust
//! use tokenstyle::{Colors, FontSizes, Spacing, Theme, ThemeOverrides, Typography, merge_themes};
//!
//! let base = Theme::new(
//!     Colors::new("#007AFF", "#5856D6", "#FFFFFF", "#F2F2F7", "#000000", "#8E8E93"),
//!     Spacing::new(4.0, 8.0, 16.0, 24.0, 32.0),
//!     Typography::new(FontSizes::new(12.0, 14.0, 18.0, 24.0)),
//! );
//!
//! let merged = merge_themes(&base, &ThemeOverrides::new().color("primary", "#FF0000"));
//! assert_eq!(merged.colors.primary, "#FF0000");
//! assert_eq!(merged.colors.secondary, base.colors.secondary);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::theme::Theme;
use crate::error::ConfigError;

/// A partial theme applied on top of a base theme by [`merge_themes`].
///
/// Colors are strings and spacing/font sizes are numbers, so any merge result
/// is still a structurally valid [`Theme`]. Deserializes from the same JSON
/// or YAML shape as a theme, with every key optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub colors: IndexMap<String, String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub spacing: IndexMap<String, f64>,
    #[serde(skip_serializing_if = "TypographyOverrides::is_empty")]
    pub typography: TypographyOverrides,
    /// Top-level sections that replace the base section wholesale.
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

/// Partial typography tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyOverrides {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub font_size: IndexMap<String, f64>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub font_weight: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub line_height: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub font_family: Map<String, Value>,
    /// Other typography entries, replaced wholesale.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TypographyOverrides {
    pub fn is_empty(&self) -> bool {
        self.font_size.is_empty()
            && self.font_weight.is_empty()
            && self.line_height.is_empty()
            && self.font_family.is_empty()
            && self.extra.is_empty()
    }
}

impl ThemeOverrides {
    /// Creates empty overrides. Merging them yields a copy of the base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses overrides from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses overrides from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn color(mut self, name: &str, value: impl Into<String>) -> Self {
        self.colors.insert(name.to_string(), value.into());
        self
    }

    pub fn spacing(mut self, name: &str, value: f64) -> Self {
        self.spacing.insert(name.to_string(), value);
        self
    }

    pub fn font_size(mut self, name: &str, value: f64) -> Self {
        self.typography.font_size.insert(name.to_string(), value);
        self
    }

    pub fn font_weight(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.typography
            .font_weight
            .insert(name.to_string(), value.into());
        self
    }

    pub fn line_height(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.typography
            .line_height
            .insert(name.to_string(), value.into());
        self
    }

    pub fn font_family(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.typography
            .font_family
            .insert(name.to_string(), value.into());
        self
    }

    /// Replaces a top-level extension section.
    pub fn extension(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.extensions.insert(name.to_string(), value.into());
        self
    }

    /// Returns true if merging these overrides changes nothing.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.spacing.is_empty()
            && self.typography.is_empty()
            && self.extensions.is_empty()
    }
}

/// Merges `overrides` onto `base`, returning a new theme.
///
/// Neither input is modified. See the [module docs](self) for the policy.
pub fn merge_themes(base: &Theme, overrides: &ThemeOverrides) -> Theme {
    let mut merged = base.clone();

    for (name, value) in &overrides.colors {
        merged.colors.set(name, value.as_str());
    }
    for (name, value) in &overrides.spacing {
        merged.spacing.set(name, *value);
    }

    let typography = &overrides.typography;
    for (name, value) in &typography.font_size {
        merged.typography.font_size.set(name, *value);
    }
    merge_section(&mut merged.typography.font_weight, &typography.font_weight);
    merge_section(&mut merged.typography.line_height, &typography.line_height);
    merge_section(&mut merged.typography.font_family, &typography.font_family);
    for (name, value) in &typography.extra {
        merged.typography.extra.insert(name.clone(), value.clone());
    }

    for (name, value) in &overrides.extensions {
        merged.set_extension(name, value.clone());
    }

    merged
}

// An empty override leaves an absent base section absent.
fn merge_section(target: &mut Option<Map<String, Value>>, overrides: &Map<String, Value>) {
    if overrides.is_empty() {
        return;
    }
    let section = target.get_or_insert_with(Map::new);
    for (name, value) in overrides {
        section.insert(name.clone(), value.clone());
    }
}
