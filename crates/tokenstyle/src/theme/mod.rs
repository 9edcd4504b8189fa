//! Design-token themes.
//!
//! A theme carries three mandatory token sections plus any number of open
//! extension sections:
//!
//! ```yaml
//! colors:                 # six required string colors, extras allowed
//!   primary: "#007AFF"
//!   secondary: "#5856D6"
//!   background: "#FFFFFF"
//!   surface: "#F2F2F7"
//!   text: "#000000"
//!   textSecondary: "#8E8E93"
//! spacing: { xs: 4, sm: 8, md: 16, lg: 24, xl: 32 }
//! typography:
//!   fontSize: { sm: 12, md: 14, lg: 18, xl: 24 }
//!   fontWeight: { regular: "400", bold: "700" }   # optional
//! shadows:                # extension, passed through untouched
//!   card: "0 1px 2px rgba(0,0,0,0.1)"
//! ```
//!
//! ## Two Views of a Theme
//!
//! Caller input arrives untyped (a `serde_json::Value` literal), and
//! [`validate_theme`] answers whether it has the theme structure. Once
//! validated it becomes a typed [`Theme`], where required tokens are named
//! fields and extensions live in side maps. [`Theme::to_value`] goes back to
//! the untyped shape for path lookups and for handing the theme to the styling
//! runtime.
//!
//! ## Overrides
//!
//! [`ThemeOverrides`] is a partial theme. [`merge_themes`] applies it per
//! section; see the [`merge`] module for the exact policy.

pub mod merge;
#[allow(clippy::module_inception)]
mod theme;
mod tokens;
mod validate;

pub use merge::{merge_themes, ThemeOverrides, TypographyOverrides};
pub use theme::Theme;
pub use tokens::{
    Colors, FontSizes, Spacing, Typography, REQUIRED_COLORS, REQUIRED_FONT_SIZES,
    REQUIRED_SPACING,
};
pub use validate::{validate_theme, validate_theme_opt};
