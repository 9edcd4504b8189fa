//! Structural validation of untyped theme literals.

use serde_json::{Map, Value};

use super::tokens::{REQUIRED_COLORS, REQUIRED_FONT_SIZES, REQUIRED_SPACING};

/// Checks that `candidate` has the structure of a theme.
///
/// A valid theme is an object with `colors`, `spacing` and `typography`
/// sections, where every required color is a string and every required
/// spacing step and `typography.fontSize` entry is a number. Unknown keys at
/// any level are allowed.
///
/// Never fails: malformed input, including `null` and non-objects, is simply
/// not a theme.
///
/// # Example
///
/// ```rust
/// use tokenstyle::validate_theme;
/// use serde_json::json;
///
/// assert!(!validate_theme(&json!(null)));
/// assert!(!validate_theme(&json!({ "colors": {} })));
/// ```
pub fn validate_theme(candidate: &Value) -> bool {
    let Some(theme) = candidate.as_object() else {
        return false;
    };

    let (Some(colors), Some(spacing), Some(typography)) = (
        section(theme, "colors"),
        section(theme, "spacing"),
        section(theme, "typography"),
    ) else {
        return false;
    };

    let Some(font_size) = section(typography, "fontSize") else {
        return false;
    };

    REQUIRED_COLORS
        .iter()
        .all(|key| colors.get(*key).is_some_and(Value::is_string))
        && REQUIRED_SPACING
            .iter()
            .all(|key| spacing.get(*key).is_some_and(Value::is_number))
        && REQUIRED_FONT_SIZES
            .iter()
            .all(|key| font_size.get(*key).is_some_and(Value::is_number))
}

/// Like [`validate_theme`], treating an absent candidate as invalid.
pub fn validate_theme_opt(candidate: Option<&Value>) -> bool {
    candidate.is_some_and(validate_theme)
}

fn section<'a>(parent: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    parent.get(key).and_then(Value::as_object)
}
