//! Convenience re-exports for common usage.
//!
//! ```rust
//! use tokenstyle::prelude::*;
//! ```

pub use crate::{
    create_adapter, create_responsive_value, get_theme_value, merge_themes,
    select_responsive_value, validate_theme, Adapter, AdapterConfig, AdapterError, Breakpoints,
    CurrentThemeProvider, ResponsiveValue, StyleRuntime, Theme, ThemeOverrides, ThemeView,
};
