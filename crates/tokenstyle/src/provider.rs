//! Read-only access to the styling runtime's live state.
//!
//! Which theme is active and how wide the screen is are owned by the styling
//! runtime. UI code reaches that state through a [`CurrentThemeProvider`]
//! passed in by the host, never through globals, so it can be exercised
//! without the runtime present.
//!
//! # Overview
//!
//! - [`CurrentThemeProvider`]: capability interface with `get` and `subscribe`
//! - [`ManualThemeProvider`]: in-memory provider for hosts that drive the
//!   state themselves, and for tests
//! - [`ThemeView`]: combines an [`Adapter`] with a provider to answer "what
//!   applies right now" questions
//!
//! # Example
//!
//! ```rust
//! use tokenstyle::{AdapterConfig, ManualThemeProvider, ResponsiveValue, ThemeView};
//! # use serde_json::json;
//! # let light = json!({
//! #     "colors": { "primary": "#007AFF", "secondary": "#5856D6", "background": "#FFFFFF",
//! #                 "surface": "#F2F2F7", "text": "#000000", "textSecondary": "#8E8E93" },
//! #     "spacing": { "xs": 4, "sm": 8, "md": 16, "lg": 24, "xl": 32 },
//! #     "typography": { "fontSize": { "sm": 12, "md": 14, "lg": 18, "xl": 24 } }
//! # });
//!
//! let adapter = AdapterConfig::new()
//!     .theme("light", light)
//!     .breakpoints([("xs", 0.0), ("md", 768.0)])
//!     .build()
//!     .unwrap();
//!
//! let provider = ManualThemeProvider::new(&adapter, "light", 375.0).unwrap();
//! let view = ThemeView::new(&adapter, &provider);
//! let columns = ResponsiveValue::new().at("xs", 1).at("md", 2);
//!
//! assert_eq!(view.responsive(&columns), Some(&1));
//! provider.set_width(1024.0);
//! assert_eq!(view.responsive(&columns), Some(&2));
//! assert_eq!(view.breakpoint().as_deref(), Some("md"));
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::adapter::{Adapter, NormalizedTheme};
use crate::breakpoints::Breakpoints;
use crate::error::{AdapterError, Result};
use crate::responsive::{select_responsive_value, ResponsiveValue};

/// The runtime state at one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeSnapshot {
    /// Name of the active theme.
    pub theme: String,
    /// Name of the active breakpoint, if the runtime reports one.
    pub breakpoint: Option<String>,
    /// Current screen width in pixels.
    pub width: f64,
}

/// Callback invoked with the new state after every change.
pub type Listener = Rc<dyn Fn(&RuntimeSnapshot)>;

/// Handle returned by [`CurrentThemeProvider::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Capability interface onto the runtime's live theme state.
///
/// Single-threaded: providers and listeners are not required to be `Send`.
pub trait CurrentThemeProvider {
    /// The current state.
    fn get(&self) -> RuntimeSnapshot;

    /// Registers a listener for state changes.
    fn subscribe(&self, listener: Listener) -> SubscriptionId;

    /// Removes a listener. Returns false if it was not registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// A provider whose state is set explicitly.
///
/// The active breakpoint is derived from the width using the adapter's
/// breakpoint set. Listeners run only when the state actually changes.
pub struct ManualThemeProvider {
    themes: Vec<String>,
    breakpoints: Breakpoints,
    state: RefCell<RuntimeSnapshot>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl ManualThemeProvider {
    /// Creates a provider for `adapter`, starting on `theme` at `width`.
    ///
    /// # Errors
    ///
    /// [`AdapterError::UnknownTheme`] if the adapter has no such theme.
    pub fn new(adapter: &Adapter, theme: impl Into<String>, width: f64) -> Result<Self> {
        let theme = theme.into();
        let themes: Vec<String> = adapter.theme_names().map(str::to_string).collect();
        if !themes.contains(&theme) {
            return Err(AdapterError::UnknownTheme { name: theme });
        }

        let breakpoints = adapter.breakpoints().clone();
        let breakpoint = breakpoints.active(width).map(str::to_string);
        Ok(Self {
            themes,
            breakpoints,
            state: RefCell::new(RuntimeSnapshot {
                theme,
                breakpoint,
                width,
            }),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        })
    }

    /// Switches the active theme.
    ///
    /// # Errors
    ///
    /// [`AdapterError::UnknownTheme`] if the theme is not part of the adapter.
    pub fn set_theme(&self, theme: &str) -> Result<()> {
        if !self.themes.iter().any(|name| name == theme) {
            return Err(AdapterError::UnknownTheme {
                name: theme.to_string(),
            });
        }

        let changed = {
            let mut state = self.state.borrow_mut();
            if state.theme == theme {
                false
            } else {
                state.theme = theme.to_string();
                true
            }
        };
        if changed {
            tracing::debug!(theme, "active theme changed");
            self.notify();
        }
        Ok(())
    }

    /// Updates the screen width and the breakpoint derived from it.
    pub fn set_width(&self, width: f64) {
        let changed = {
            let mut state = self.state.borrow_mut();
            if same_width(state.width, width) {
                false
            } else {
                state.width = width;
                state.breakpoint = self.breakpoints.active(width).map(str::to_string);
                true
            }
        };
        if changed {
            self.notify();
        }
    }

    fn notify(&self) {
        let snapshot = self.get();
        // Listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

// NaN never equals itself; two NaN widths are the same state.
fn same_width(current: f64, next: f64) -> bool {
    current == next || (current.is_nan() && next.is_nan())
}

impl CurrentThemeProvider for ManualThemeProvider {
    fn get(&self) -> RuntimeSnapshot {
        self.state.borrow().clone()
    }

    fn subscribe(&self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

impl fmt::Debug for ManualThemeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualThemeProvider")
            .field("state", &self.state.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

/// Read-only view of the adapter through the runtime's current state.
pub struct ThemeView<'a, P: CurrentThemeProvider + ?Sized> {
    adapter: &'a Adapter,
    provider: &'a P,
}

impl<'a, P: CurrentThemeProvider + ?Sized> ThemeView<'a, P> {
    pub fn new(adapter: &'a Adapter, provider: &'a P) -> Self {
        Self { adapter, provider }
    }

    pub fn snapshot(&self) -> RuntimeSnapshot {
        self.provider.get()
    }

    pub fn theme_name(&self) -> String {
        self.provider.get().theme
    }

    /// The active theme, or `None` if the runtime reports a theme the
    /// adapter does not know.
    pub fn theme(&self) -> Option<&'a NormalizedTheme> {
        self.adapter.theme(&self.provider.get().theme)
    }

    pub fn breakpoint(&self) -> Option<String> {
        self.provider.get().breakpoint
    }

    /// Selects the value for the current screen width.
    pub fn responsive<'v, T>(&self, values: &'v ResponsiveValue<T>) -> Option<&'v T> {
        select_responsive_value(self.adapter.breakpoints(), values, self.provider.get().width)
    }

    /// Looks up a dot path in the active theme.
    pub fn value(&self, path: &str, fallback: Option<Value>) -> Option<Value> {
        self.adapter
            .get_theme_value(&self.provider.get().theme, path, fallback)
    }
}
