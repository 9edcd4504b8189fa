//! Token groups that make up a theme.
//!
//! Each group has a fixed set of required tokens, stored as named fields, and
//! an open set of extension tokens kept in an auxiliary map. Lookups by name
//! consult both, so `colors.get("primary")` and `colors.get("accent")` behave
//! the same way whether the token is required or an extension.
//!
//! The serialized shape uses the camelCase names of the token schema
//! (`textSecondary`, `fontSize`, `fontWeight`, ...).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Names of the colors every theme must define.
pub const REQUIRED_COLORS: [&str; 6] = [
    "primary",
    "secondary",
    "background",
    "surface",
    "text",
    "textSecondary",
];

/// Names of the spacing steps every theme must define.
pub const REQUIRED_SPACING: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];

/// Names of the font sizes every theme must define.
pub const REQUIRED_FONT_SIZES: [&str; 4] = ["sm", "md", "lg", "xl"];

/// Named color values.
///
/// # Example
///
/// ```rust
/// use tokenstyle::Colors;
///
/// let colors = Colors::new("#007AFF", "#5856D6", "#FFFFFF", "#F2F2F7", "#000000", "#8E8E93")
///     .with("accent", "#FF9500");
///
/// assert_eq!(colors.get("primary"), Some("#007AFF"));
/// assert_eq!(colors.get("accent"), Some("#FF9500"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Colors {
    /// Creates a color group from the six required colors.
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        background: impl Into<String>,
        surface: impl Into<String>,
        text: impl Into<String>,
        text_secondary: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            background: background.into(),
            surface: surface.into(),
            text: text.into(),
            text_secondary: text_secondary.into(),
            extra: Map::new(),
        }
    }

    /// Sets a color by name, returning `self` for chaining.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a color by name.
    ///
    /// Required names write the named field; any other name is stored as an
    /// extension color.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match name {
            "primary" => self.primary = value,
            "secondary" => self.secondary = value,
            "background" => self.background = value,
            "surface" => self.surface = value,
            "text" => self.text = value,
            "textSecondary" => self.text_secondary = value,
            _ => {
                self.extra.insert(name.to_string(), Value::String(value));
            }
        }
    }

    /// Looks up a color by name.
    ///
    /// Extension entries that are not strings are reported as missing.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "primary" => Some(&self.primary),
            "secondary" => Some(&self.secondary),
            "background" => Some(&self.background),
            "surface" => Some(&self.surface),
            "text" => Some(&self.text),
            "textSecondary" => Some(&self.text_secondary),
            _ => self.extra.get(name).and_then(Value::as_str),
        }
    }

    /// Extension colors, keyed by name.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// Numeric spacing scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Spacing {
    /// Creates a spacing scale from the five required steps.
    pub fn new(xs: f64, sm: f64, md: f64, lg: f64, xl: f64) -> Self {
        Self {
            xs,
            sm,
            md,
            lg,
            xl,
            extra: Map::new(),
        }
    }

    /// Sets a step by name, returning `self` for chaining.
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a step by name. Unknown names become extension steps.
    pub fn set(&mut self, name: &str, value: f64) {
        match name {
            "xs" => self.xs = value,
            "sm" => self.sm = value,
            "md" => self.md = value,
            "lg" => self.lg = value,
            "xl" => self.xl = value,
            _ => {
                self.extra.insert(name.to_string(), number(value));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "xs" => Some(self.xs),
            "sm" => Some(self.sm),
            "md" => Some(self.md),
            "lg" => Some(self.lg),
            "xl" => Some(self.xl),
            _ => self.extra.get(name).and_then(Value::as_f64),
        }
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// Font size scale inside [`Typography`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl FontSizes {
    pub fn new(sm: f64, md: f64, lg: f64, xl: f64) -> Self {
        Self {
            sm,
            md,
            lg,
            xl,
            extra: Map::new(),
        }
    }

    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: f64) {
        match name {
            "sm" => self.sm = value,
            "md" => self.md = value,
            "lg" => self.lg = value,
            "xl" => self.xl = value,
            _ => {
                self.extra.insert(name.to_string(), number(value));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "sm" => Some(self.sm),
            "md" => Some(self.md),
            "lg" => Some(self.lg),
            "xl" => Some(self.xl),
            _ => self.extra.get(name).and_then(Value::as_f64),
        }
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// Typography tokens.
///
/// `font_size` is mandatory. `font_weight`, `line_height` and `font_family`
/// are optional open mappings; their values are passed through untouched
/// (weights are commonly strings such as `"600"`, families are font names).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_size: FontSizes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

impl Typography {
    /// Creates typography tokens with only a font size scale.
    pub fn new(font_size: FontSizes) -> Self {
        Self {
            font_size,
            font_weight: None,
            line_height: None,
            font_family: None,
            extra: Map::new(),
        }
    }

    pub fn with_font_weight(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.font_weight
            .get_or_insert_with(Map::new)
            .insert(name.to_string(), value.into());
        self
    }

    pub fn with_line_height(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.line_height
            .get_or_insert_with(Map::new)
            .insert(name.to_string(), value.into());
        self
    }

    pub fn with_font_family(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.font_family
            .get_or_insert_with(Map::new)
            .insert(name.to_string(), value.into());
        self
    }

    /// Typography entries outside the four known sub-sections.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

// f64 values that JSON cannot represent (NaN, infinities) are stored as null.
fn number(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
