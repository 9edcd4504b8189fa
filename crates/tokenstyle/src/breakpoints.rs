//! Breakpoint sets.
//!
//! A breakpoint set maps names to pixel-width thresholds. Callers may list
//! them in any order; [`normalize_breakpoints`] produces the canonical form,
//! sorted by ascending threshold, which is what the rest of the crate and the
//! styling runtime consume.
//!
//! Every set must contain a breakpoint at exactly `0`. It is the catch-all
//! that applies at any width.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, Result};

/// A normalized breakpoint set: sorted ascending, with a zero entry.
///
/// Serializes as a plain `{ name: threshold }` mapping in ascending order.
/// Deserializing runs the same normalization as [`normalize_breakpoints`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<String, f64>", into = "IndexMap<String, f64>")]
pub struct Breakpoints {
    entries: IndexMap<String, f64>,
}

impl Breakpoints {
    /// Threshold of the named breakpoint.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates `(name, threshold)` pairs in ascending threshold order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries
            .iter()
            .map(|(name, threshold)| (name.as_str(), *threshold))
    }

    /// Breakpoint names in ascending threshold order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a normalized set, which holds at least the zero entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The breakpoint that applies at `width`: the one with the largest
    /// threshold not above `width`. Among equal thresholds the later one wins.
    pub fn active(&self, width: f64) -> Option<&str> {
        self.iter()
            .filter(|(_, threshold)| *threshold <= width)
            .last()
            .map(|(name, _)| name)
    }

    /// The underlying ordered map.
    pub fn as_map(&self) -> &IndexMap<String, f64> {
        &self.entries
    }
}

impl TryFrom<IndexMap<String, f64>> for Breakpoints {
    type Error = AdapterError;

    fn try_from(map: IndexMap<String, f64>) -> Result<Self> {
        normalize_breakpoints(Some(&map))
    }
}

impl From<Breakpoints> for IndexMap<String, f64> {
    fn from(breakpoints: Breakpoints) -> Self {
        breakpoints.entries
    }
}

/// Validates and sorts a breakpoint mapping.
///
/// The result holds the same name/threshold pairs in ascending threshold
/// order. The sort is stable, so breakpoints sharing a threshold keep their
/// input order, and normalizing twice gives the same result as once.
///
/// # Errors
///
/// - [`AdapterError::MissingBreakpoints`] when `map` is `None`
/// - [`AdapterError::MissingZeroBreakpoint`] when no threshold equals `0`
///
/// # Example
///
/// ```rust
/// use indexmap::IndexMap;
/// use tokenstyle::normalize_breakpoints;
///
/// let map: IndexMap<String, f64> = [("xl", 1200.0), ("xs", 0.0), ("lg", 992.0), ("sm", 576.0), ("md", 768.0)]
///     .into_iter()
///     .map(|(name, px)| (name.to_string(), px))
///     .collect();
///
/// let breakpoints = normalize_breakpoints(Some(&map)).unwrap();
/// let order: Vec<&str> = breakpoints.names().collect();
/// assert_eq!(order, ["xs", "sm", "md", "lg", "xl"]);
/// ```
pub fn normalize_breakpoints(map: Option<&IndexMap<String, f64>>) -> Result<Breakpoints> {
    let map = map.ok_or(AdapterError::MissingBreakpoints)?;

    if !map.values().any(|threshold| *threshold == 0.0) {
        return Err(AdapterError::MissingZeroBreakpoint);
    }

    for (name, threshold) in map {
        if !threshold.is_finite() || *threshold < 0.0 {
            tracing::warn!(breakpoint = %name, threshold, "breakpoint threshold is not a non-negative number");
        }
    }

    let mut entries: Vec<(&String, &f64)> = map.iter().collect();
    entries.sort_by(|a, b| compare_thresholds(*a.1, *b.1));

    Ok(Breakpoints {
        entries: entries
            .into_iter()
            .map(|(name, threshold)| (name.clone(), *threshold))
            .collect(),
    })
}

// -0.0 and 0.0 compare equal, as they do under `==`.
fn compare_thresholds(a: f64, b: f64) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}
