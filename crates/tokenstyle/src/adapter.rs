//! Adapter construction.
//!
//! [`create_adapter`] turns caller-supplied theme and breakpoint literals into
//! an [`Adapter`]: validated, typed themes, a normalized breakpoint set and the
//! opaque runtime settings. Construction is all-or-nothing. The checks run in
//! a fixed order and the first failure is returned:
//!
//! 1. at least one theme ([`AdapterError::MissingThemes`])
//! 2. a breakpoint mapping ([`AdapterError::MissingBreakpoints`])
//! 3. a zero breakpoint ([`AdapterError::MissingZeroBreakpoint`])
//! 4. every theme has the theme structure, in declaration order
//!    ([`AdapterError::InvalidThemeStructure`])
//!
//! # Example
//!
//! ```rust
//! use tokenstyle::{create_adapter, AdapterConfig};
//! use serde_json::json;
//!
//! let light = json!({
//!     "colors": {
//!         "primary": "#007AFF", "secondary": "#5856D6", "background": "#FFFFFF",
//!         "surface": "#F2F2F7", "text": "#000000", "textSecondary": "#8E8E93"
//!     },
//!     "spacing": { "xs": 4, "sm": 8, "md": 16, "lg": 24, "xl": 32 },
//!     "typography": { "fontSize": { "sm": 12, "md": 14, "lg": 18, "xl": 24 } }
//! });
//!
//! let config = AdapterConfig::new()
//!     .theme("light", light)
//!     .breakpoint("md", 768.0)
//!     .breakpoint("xs", 0.0);
//!
//! let adapter = create_adapter(&config).unwrap();
//! assert_eq!(adapter.get_theme_value("light", "colors.primary", None), Some(json!("#007AFF")));
//! assert_eq!(adapter.theme("light").unwrap().utils().spacing(2.0), 32.0);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::breakpoints::{normalize_breakpoints, Breakpoints};
use crate::error::{AdapterError, Result};
use crate::path::resolve_or;
use crate::responsive::{select_responsive_value, ResponsiveValue};
use crate::runtime::{RuntimeConfig, StyleRuntime};
use crate::theme::{merge_themes, validate_theme, Theme, ThemeOverrides};

/// Caller input for [`create_adapter`].
///
/// Mirrors the configuration shape `{ themes, breakpoints, settings? }`, so it
/// can be deserialized directly from JSON or YAML (see [`crate::config`]).
/// Themes are untyped literals at this stage; they are validated during
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    #[serde(default)]
    pub themes: IndexMap<String, Value>,
    #[serde(default)]
    pub breakpoints: Option<IndexMap<String, f64>>,
    /// Forwarded to the runtime untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

impl AdapterConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a theme literal, returning `self` for chaining.
    ///
    /// Accepts anything convertible into a JSON value, including a typed
    /// [`Theme`].
    pub fn theme(mut self, name: impl Into<String>, theme: impl Into<Value>) -> Self {
        self.themes.insert(name.into(), theme.into());
        self
    }

    /// Adds a breakpoint threshold in pixels.
    pub fn breakpoint(mut self, name: impl Into<String>, threshold: f64) -> Self {
        self.breakpoints
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), threshold);
        self
    }

    /// Adds several breakpoints at once, in the given order.
    pub fn breakpoints<K: Into<String>>(
        mut self,
        entries: impl IntoIterator<Item = (K, f64)>,
    ) -> Self {
        let map = self.breakpoints.get_or_insert_with(IndexMap::new);
        for (name, threshold) in entries {
            map.insert(name.into(), threshold);
        }
        self
    }

    /// Sets the runtime settings.
    pub fn settings(mut self, settings: impl Into<Value>) -> Self {
        self.settings = Some(settings.into());
        self
    }

    /// Shorthand for [`create_adapter`].
    pub fn build(&self) -> Result<Adapter> {
        create_adapter(self)
    }
}

/// Scaling helpers bound to one theme's base values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeUtils {
    spacing_base: f64,
    font_size_base: f64,
}

impl ThemeUtils {
    /// Binds the helpers to `theme.spacing.md` and `theme.typography.fontSize.md`.
    pub fn for_theme(theme: &Theme) -> Self {
        Self {
            spacing_base: theme.spacing.md,
            font_size_base: theme.typography.font_size.md,
        }
    }

    /// `spacing.md * multiplier`.
    pub fn spacing(&self, multiplier: f64) -> f64 {
        self.spacing_base * multiplier
    }

    /// `typography.fontSize.md * scale`.
    pub fn font_size(&self, scale: f64) -> f64 {
        self.font_size_base * scale
    }
}

/// A theme as held by an [`Adapter`].
///
/// Keeps both the typed [`Theme`] and the validated literal it was built
/// from. Lookups and the runtime hand-off read the literal, so token values
/// come back exactly as supplied (`16` stays an integer).
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTheme {
    theme: Theme,
    value: Value,
    utils: ThemeUtils,
}

impl NormalizedTheme {
    fn new(theme: Theme, value: Value) -> Self {
        let utils = ThemeUtils::for_theme(&theme);
        Self {
            theme,
            value,
            utils,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The theme literal as supplied to [`create_adapter`].
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    pub fn utils(&self) -> ThemeUtils {
        self.utils
    }
}

impl std::ops::Deref for NormalizedTheme {
    type Target = Theme;

    fn deref(&self) -> &Theme {
        &self.theme
    }
}

/// The validated output of [`create_adapter`].
///
/// Immutable configuration: the active theme and breakpoint at any moment are
/// owned by the styling runtime, not by the adapter (see [`crate::provider`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Adapter {
    themes: IndexMap<String, NormalizedTheme>,
    breakpoints: Breakpoints,
    settings: Option<Value>,
}

impl Adapter {
    pub fn theme(&self, name: &str) -> Option<&NormalizedTheme> {
        self.themes.get(name)
    }

    /// Theme names in declaration order.
    pub fn theme_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.themes.keys().map(String::as_str)
    }

    pub fn themes(&self) -> impl Iterator<Item = (&str, &NormalizedTheme)> + '_ {
        self.themes.iter().map(|(name, theme)| (name.as_str(), theme))
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn settings(&self) -> Option<&Value> {
        self.settings.as_ref()
    }

    /// Looks up a dot path in the named theme.
    ///
    /// An unknown theme name resolves like a missing path: `fallback`.
    pub fn get_theme_value(&self, theme: &str, path: &str, fallback: Option<Value>) -> Option<Value> {
        match self.themes.get(theme) {
            Some(normalized) => resolve_or(normalized.as_value(), path, fallback),
            None => {
                tracing::trace!(theme, "lookup in unknown theme");
                fallback
            }
        }
    }

    /// Merges `overrides` onto the named theme. The bundle is not modified.
    ///
    /// # Errors
    ///
    /// [`AdapterError::UnknownTheme`] if the bundle has no such theme.
    pub fn merge_theme(&self, theme: &str, overrides: &ThemeOverrides) -> Result<Theme> {
        let base = self
            .themes
            .get(theme)
            .ok_or_else(|| AdapterError::UnknownTheme {
                name: theme.to_string(),
            })?;
        Ok(merge_themes(base.theme(), overrides))
    }

    /// Selects a responsive value against this bundle's breakpoints.
    pub fn select<'a, T>(&self, values: &'a ResponsiveValue<T>, width: f64) -> Option<&'a T> {
        select_responsive_value(&self.breakpoints, values, width)
    }

    /// The configuration to hand to the styling runtime.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            themes: self
                .themes
                .iter()
                .map(|(name, theme)| (name.clone(), theme.as_value().clone()))
                .collect(),
            breakpoints: self.breakpoints.clone(),
            settings: self.settings.clone(),
        }
    }

    /// Configures `runtime` with this bundle.
    pub fn register<R: StyleRuntime>(&self, runtime: &mut R) -> std::result::Result<(), R::Error> {
        tracing::debug!(
            themes = self.themes.len(),
            breakpoints = self.breakpoints.len(),
            "registering adapter configuration with styling runtime"
        );
        runtime.configure(&self.runtime_config())
    }
}

/// Validates `config` and builds an [`Adapter`].
///
/// Themes are copied out of `config`; the caller's literals are never shared
/// with the bundle. See the [module docs](self) for the order of checks.
pub fn create_adapter(config: &AdapterConfig) -> Result<Adapter> {
    if config.themes.is_empty() {
        return Err(AdapterError::MissingThemes);
    }

    let breakpoints = normalize_breakpoints(config.breakpoints.as_ref())?;

    if let Some(name) = config
        .themes
        .iter()
        .find(|(_, literal)| !validate_theme(literal))
        .map(|(name, _)| name)
    {
        return Err(AdapterError::InvalidThemeStructure { name: name.clone() });
    }

    let mut themes = IndexMap::with_capacity(config.themes.len());
    for (name, literal) in &config.themes {
        themes.insert(name.clone(), normalize_theme(name, literal)?);
    }

    tracing::debug!(
        themes = themes.len(),
        breakpoints = breakpoints.len(),
        settings = config.settings.is_some(),
        "adapter created"
    );

    Ok(Adapter {
        themes,
        breakpoints,
        settings: config.settings.clone(),
    })
}

fn normalize_theme(name: &str, literal: &Value) -> Result<NormalizedTheme> {
    let value = literal.clone();
    let theme = Theme::deserialize(&value).map_err(|err| {
        tracing::warn!(theme = name, error = %err, "theme passed validation but could not be typed");
        AdapterError::InvalidThemeStructure {
            name: name.to_string(),
        }
    })?;
    Ok(NormalizedTheme::new(theme, value))
}
