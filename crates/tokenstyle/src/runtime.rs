//! Hand-off to the external styling runtime.
//!
//! The runtime (theme registry, style recomputation, breakpoint detection)
//! lives outside this crate. It receives the adapter's themes and breakpoints
//! in their serialized token shape through [`StyleRuntime::configure`], plus
//! the caller's `settings`, forwarded without interpretation.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::breakpoints::Breakpoints;

/// The configuration handed to a styling runtime.
///
/// Serializes to `{ "themes": {..}, "breakpoints": {..}, "settings": .. }`,
/// with `settings` omitted when the caller supplied none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuntimeConfig {
    pub themes: IndexMap<String, Value>,
    pub breakpoints: Breakpoints,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

impl RuntimeConfig {
    /// The configuration as a single JSON value.
    ///
    /// Themes and settings are already JSON values and thresholds are plain
    /// numbers, so serialization does not fail; a failure is logged and
    /// yields `Value::Null`.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "runtime configuration could not be serialized");
            Value::Null
        })
    }
}

/// A styling runtime that accepts adapter configuration.
///
/// Implemented by the host application, typically as a thin bridge onto the
/// runtime's own configuration entry point.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{RuntimeConfig, StyleRuntime};
///
/// #[derive(Default)]
/// struct Recorder {
///     configured: Vec<RuntimeConfig>,
/// }
///
/// impl StyleRuntime for Recorder {
///     type Error = std::convert::Infallible;
///
///     fn configure(&mut self, config: &RuntimeConfig) -> Result<(), Self::Error> {
///         self.configured.push(config.clone());
///         Ok(())
///     }
/// }
/// ```
pub trait StyleRuntime {
    /// Error reported by the runtime when it rejects a configuration.
    type Error: std::error::Error;

    fn configure(&mut self, config: &RuntimeConfig) -> Result<(), Self::Error>;
}
