//! Values that vary by breakpoint.
//!
//! A [`ResponsiveValue`] is a partial map from breakpoint name to value. It
//! does not need to cover every breakpoint in the active set. Selection is a
//! step function: the value of the largest breakpoint at or below the current
//! width applies, and nothing is interpolated between breakpoints.
//!
//! ```rust
//! use indexmap::IndexMap;
//! use tokenstyle::{normalize_breakpoints, select_responsive_value, ResponsiveValue};
//!
//! let map: IndexMap<String, f64> = [("xs", 0.0), ("md", 768.0), ("lg", 992.0)]
//!     .into_iter()
//!     .map(|(name, px)| (name.to_string(), px))
//!     .collect();
//! let breakpoints = normalize_breakpoints(Some(&map)).unwrap();
//!
//! let columns = ResponsiveValue::new().at("xs", 1).at("md", 3).at("lg", 4);
//!
//! assert_eq!(select_responsive_value(&breakpoints, &columns, 200.0), Some(&1));
//! assert_eq!(select_responsive_value(&breakpoints, &columns, 800.0), Some(&3));
//! assert_eq!(select_responsive_value(&breakpoints, &columns, 1500.0), Some(&4));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::breakpoints::Breakpoints;

/// A partial breakpoint-name to value map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponsiveValue<T> {
    values: IndexMap<String, T>,
}

impl<T> ResponsiveValue<T> {
    /// Creates an empty responsive value.
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Sets the value for a breakpoint, returning `self` for chaining.
    pub fn at(mut self, breakpoint: impl Into<String>, value: T) -> Self {
        self.values.insert(breakpoint.into(), value);
        self
    }

    pub fn insert(&mut self, breakpoint: impl Into<String>, value: T) -> Option<T> {
        self.values.insert(breakpoint.into(), value)
    }

    pub fn get(&self, breakpoint: &str) -> Option<&T> {
        self.values.get(breakpoint)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<T> Default for ResponsiveValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Into<String>> FromIterator<(K, T)> for ResponsiveValue<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(breakpoint, value)| (breakpoint.into(), value))
                .collect(),
        }
    }
}

impl<T, K: Into<String>, const N: usize> From<[(K, T); N]> for ResponsiveValue<T> {
    fn from(entries: [(K, T); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Builds a [`ResponsiveValue`] from `(breakpoint, value)` pairs.
pub fn create_responsive_value<T, K: Into<String>>(
    entries: impl IntoIterator<Item = (K, T)>,
) -> ResponsiveValue<T> {
    entries.into_iter().collect()
}

/// Selects the value that applies at `width`.
///
/// Only breakpoints that have an entry in `values` are considered. Among
/// those, the one with the largest threshold `<= width` wins; when several
/// share that threshold, the last one in ascending order wins. Entries naming
/// breakpoints outside `breakpoints` are ignored.
///
/// Returns `None` when no entry qualifies, e.g. when `values` has no entry for
/// the zero breakpoint and `width` is below every other threshold.
pub fn select_responsive_value<'a, T>(
    breakpoints: &Breakpoints,
    values: &'a ResponsiveValue<T>,
    width: f64,
) -> Option<&'a T> {
    let mut selected = None;
    for (name, threshold) in breakpoints.iter() {
        if threshold <= width {
            if let Some(value) = values.get(name) {
                selected = Some(value);
            }
        }
    }
    selected
}
