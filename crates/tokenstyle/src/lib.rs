//! # tokenstyle - Design-Token Themes for Styling Runtimes
//!
//! `tokenstyle` adapts a design-token theme schema (colors, spacing,
//! typography, breakpoints) to the configuration an external styling runtime
//! expects. The runtime does the actual styling; this crate makes sure what
//! it receives is well formed, and gives UI code a few utilities to read it.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: typed design tokens with open extension sections
//! - [`validate_theme`]: structural check of an untyped theme literal
//! - [`merge_themes`]: per-section merge of [`ThemeOverrides`] onto a theme
//! - [`get_theme_value`]: dot-path lookup with fallback
//! - [`Breakpoints`]: named pixel thresholds, sorted, with a zero entry
//! - [`ResponsiveValue`] and [`select_responsive_value`]: per-breakpoint values
//! - [`create_adapter`]: validates an [`AdapterConfig`] into an [`Adapter`]
//! - [`StyleRuntime`]: where the adapter hands its configuration off
//! - [`CurrentThemeProvider`] and [`ThemeView`]: read access to the runtime's
//!   live state
//!
//! ## Quick Start
//!
//! ```rust
//! use tokenstyle::{AdapterConfig, ResponsiveValue, ThemeOverrides};
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
//! let adapter = AdapterConfig::new()
//!     .theme("light", light)
//!     .breakpoints([("xl", 1200.0), ("xs", 0.0), ("md", 768.0)])
//!     .build()
//!     .unwrap();
//!
//! // Breakpoints come back sorted
//! let names: Vec<&str> = adapter.breakpoints().names().collect();
//! assert_eq!(names, ["xs", "md", "xl"]);
//!
//! // Dot-path lookup with fallback
//! assert_eq!(adapter.get_theme_value("light", "colors.primary", None), Some(json!("#007AFF")));
//! assert_eq!(
//!     adapter.get_theme_value("light", "colors.brand", Some(json!("#000"))),
//!     Some(json!("#000")),
//! );
//!
//! // Responsive values are a step function over the breakpoints
//! let gutter = ResponsiveValue::new().at("xs", 8).at("md", 16);
//! assert_eq!(adapter.select(&gutter, 800.0), Some(&16));
//!
//! // Merging never touches the bundle
//! let branded = adapter
//!     .merge_theme("light", &ThemeOverrides::new().color("primary", "#FF2D55"))
//!     .unwrap();
//! assert_eq!(branded.colors.primary, "#FF2D55");
//! assert_eq!(branded.colors.secondary, "#5856D6");
//! ```
//!
//! ## Errors
//!
//! Construction fails with an [`AdapterError`] naming the first problem found.
//! Value-level misses are not errors: lookups return their fallback,
//! responsive selection returns `None`, validation returns `false`.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (construction and registration at
//! `debug`, suspicious breakpoints at `warn`, lookup misses at `trace`). It
//! never installs a subscriber.

// Internal modules
pub mod adapter;
pub mod breakpoints;
pub mod config;
mod error;
pub mod path;
pub mod prelude;
pub mod provider;
pub mod responsive;
pub mod runtime;
pub mod theme;

pub use adapter::{create_adapter, Adapter, AdapterConfig, NormalizedTheme, ThemeUtils};
pub use breakpoints::{normalize_breakpoints, Breakpoints};
pub use config::{ConfigFormat, CONFIG_EXTENSIONS};
pub use error::{AdapterError, ConfigError, Result};
pub use path::{get_theme_value, lookup_path};
pub use provider::{
    CurrentThemeProvider, Listener, ManualThemeProvider, RuntimeSnapshot, SubscriptionId,
    ThemeView,
};
pub use responsive::{create_responsive_value, select_responsive_value, ResponsiveValue};
pub use runtime::{RuntimeConfig, StyleRuntime};
pub use theme::{
    merge_themes, validate_theme, validate_theme_opt, Colors, FontSizes, Spacing, Theme,
    ThemeOverrides, Typography, TypographyOverrides, REQUIRED_COLORS, REQUIRED_FONT_SIZES,
    REQUIRED_SPACING,
};
