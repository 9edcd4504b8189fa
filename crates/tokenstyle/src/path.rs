//! Dot-path lookup into theme values.
//!
//! Paths are plain dot-separated keys (`"colors.primary"`,
//! `"typography.fontSize.md"`, `"shadows.card.offset.y"`). There is no
//! wildcard or index syntax; arrays are leaves.

use serde_json::Value;

use crate::theme::Theme;

/// Walks `root` along `path`, one key per segment.
///
/// Returns `None` as soon as the current node is not an object or does not
/// contain the next key.
///
/// ```rust
/// use tokenstyle::lookup_path;
/// use serde_json::json;
///
/// let value = json!({ "a": { "b": { "c": { "d": 7 } } } });
/// assert_eq!(lookup_path(&value, "a.b.c.d"), Some(&json!(7)));
/// assert_eq!(lookup_path(&value, "a.x"), None);
/// ```
pub fn lookup_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(root, |node, segment| node.as_object()?.get(segment))
}

/// Looks up `path` in `theme`, returning `fallback` when it does not resolve.
///
/// Works on required tokens and extension sections alike, using the
/// serialized token names (`colors.textSecondary`, `typography.fontSize.md`).
///
/// ```rust
/// use tokenstyle::{get_theme_value, Colors, FontSizes, Spacing, Theme, Typography};
/// use serde_json::json;
///
/// let theme = Theme::new(
///     Colors::new("#007AFF", "#5856D6", "#FFFFFF", "#F2F2F7", "#000000", "#8E8E93"),
///     Spacing::new(4.0, 8.0, 16.0, 24.0, 32.0),
///     Typography::new(FontSizes::new(12.0, 14.0, 18.0, 24.0)),
/// );
///
/// assert_eq!(get_theme_value(&theme, "colors.primary", None), Some(json!("#007AFF")));
/// assert_eq!(
///     get_theme_value(&theme, "colors.nonexistent", Some(json!("#000"))),
///     Some(json!("#000")),
/// );
/// ```
pub fn get_theme_value(theme: &Theme, path: &str, fallback: Option<Value>) -> Option<Value> {
    resolve_or(&theme.to_value(), path, fallback)
}

pub(crate) fn resolve_or(root: &Value, path: &str, fallback: Option<Value>) -> Option<Value> {
    match lookup_path(root, path) {
        Some(value) => Some(value.clone()),
        None => {
            tracing::trace!(path, "theme path did not resolve, using fallback");
            fallback
        }
    }
}
