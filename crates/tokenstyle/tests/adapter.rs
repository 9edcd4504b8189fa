//! End-to-end behavior of the adapter bundle.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{json, Value};
use tokenstyle::{
    create_adapter, create_responsive_value, get_theme_value, merge_themes, validate_theme,
    AdapterConfig, AdapterError, CurrentThemeProvider, ManualThemeProvider, ResponsiveValue,
    RuntimeConfig, RuntimeSnapshot, StyleRuntime, Theme, ThemeOverrides, ThemeView,
};

// ============================================================================
// Fixtures
// ============================================================================

fn light() -> Value {
    json!({
        "colors": {
            "primary": "#007AFF", "secondary": "#5856D6", "background": "#FFFFFF",
            "surface": "#F2F2F7", "text": "#000000", "textSecondary": "#8E8E93"
        },
        "spacing": { "xs": 4, "sm": 8, "md": 16, "lg": 24, "xl": 32 },
        "typography": {
            "fontSize": { "sm": 12, "md": 14, "lg": 18, "xl": 24 },
            "fontWeight": { "regular": "400", "bold": "700" }
        },
        "borderRadius": { "sm": 4, "md": 8 }
    })
}

fn dark() -> Value {
    let mut theme = light();
    theme["colors"]["primary"] = json!("#0A84FF");
    theme["colors"]["background"] = json!("#000000");
    theme["colors"]["text"] = json!("#FFFFFF");
    theme
}

fn config() -> AdapterConfig {
    AdapterConfig::new()
        .theme("light", light())
        .theme("dark", dark())
        .breakpoints([
            ("xl", 1200.0),
            ("xs", 0.0),
            ("lg", 992.0),
            ("sm", 576.0),
            ("md", 768.0),
        ])
}

#[derive(Debug, thiserror::Error)]
#[error("runtime rejected configuration")]
struct Rejected;

#[derive(Default)]
struct RecordingRuntime {
    configured: Vec<RuntimeConfig>,
    reject: bool,
}

impl StyleRuntime for RecordingRuntime {
    type Error = Rejected;

    fn configure(&mut self, config: &RuntimeConfig) -> Result<(), Rejected> {
        if self.reject {
            return Err(Rejected);
        }
        self.configured.push(config.clone());
        Ok(())
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn breakpoints_sorted_ascending() {
    let adapter = create_adapter(&config()).unwrap();
    let names: Vec<&str> = adapter.breakpoints().names().collect();
    assert_eq!(names, vec!["xs", "sm", "md", "lg", "xl"]);
}

#[test]
fn construction_error_messages() {
    assert_eq!(
        create_adapter(&AdapterConfig::new()).unwrap_err().to_string(),
        "at least one theme required"
    );
    assert_eq!(
        create_adapter(&AdapterConfig::new().theme("light", light()))
            .unwrap_err()
            .to_string(),
        "breakpoints configuration required"
    );
    assert_eq!(
        create_adapter(&AdapterConfig::new().theme("light", light()).breakpoint("md", 768.0))
            .unwrap_err()
            .to_string(),
        "a zero breakpoint is required"
    );
    assert_eq!(
        create_adapter(&config().theme("broken", json!({ "colors": {} })))
            .unwrap_err()
            .to_string(),
        "invalid theme structure: 'broken'"
    );
}

#[test]
fn themes_round_trip_through_bundle() {
    let adapter = create_adapter(&config()).unwrap();
    let normalized = adapter.theme("light").unwrap();

    assert!(validate_theme(normalized.as_value()));
    assert_eq!(normalized.as_value(), &light());
    assert_eq!(normalized.colors.primary, "#007AFF");
    assert_eq!(normalized.spacing.lg, 24.0);
    assert_eq!(normalized.extension("borderRadius"), Some(&json!({ "sm": 4, "md": 8 })));
}

#[test]
fn integer_tokens_come_back_as_integers() {
    let adapter = create_adapter(&config()).unwrap();
    assert_eq!(
        adapter.get_theme_value("light", "spacing.md", None),
        Some(json!(16))
    );
    assert_eq!(
        adapter.get_theme_value("light", "typography.fontSize.xl", None),
        Some(json!(24))
    );

    let handed = adapter.runtime_config();
    assert_eq!(handed.themes["light"], light());
    assert_eq!(handed.themes["dark"], dark());
}

// ============================================================================
// Lookup and merge
// ============================================================================

#[test]
fn lookup_with_fallback() {
    let adapter = create_adapter(&config()).unwrap();
    assert_eq!(
        adapter.get_theme_value("dark", "colors.primary", None),
        Some(json!("#0A84FF"))
    );
    assert_eq!(
        adapter.get_theme_value("dark", "typography.fontWeight.bold", None),
        Some(json!("700"))
    );
    assert_eq!(
        adapter.get_theme_value("dark", "colors.primary.shade", Some(json!("#111"))),
        Some(json!("#111"))
    );
    assert_eq!(adapter.get_theme_value("dark", "shadows.card", None), None);
}

#[test]
fn free_lookup_on_typed_theme() {
    let theme: Theme = serde_json::from_value(light()).unwrap();
    assert_eq!(
        get_theme_value(&theme, "borderRadius.md", None),
        Some(json!(8))
    );
    assert_eq!(
        get_theme_value(&theme, "", Some(json!("root"))),
        Some(json!("root"))
    );
}

#[test]
fn merge_is_per_section() {
    let adapter = create_adapter(&config()).unwrap();
    let base = adapter.theme("light").unwrap().theme();

    let overrides = ThemeOverrides::new()
        .color("primary", "#FF2D55")
        .spacing("md", 20.0)
        .font_size("md", 15.0)
        .font_weight("semibold", "600")
        .extension("borderRadius", json!({ "lg": 16 }));
    let merged = merge_themes(base, &overrides);

    assert_eq!(merged.colors.primary, "#FF2D55");
    assert_eq!(merged.colors.secondary, "#5856D6");
    assert_eq!(merged.spacing.md, 20.0);
    assert_eq!(merged.spacing.sm, 8.0);
    assert_eq!(merged.typography.font_size.md, 15.0);
    assert_eq!(merged.typography.font_size.lg, 18.0);

    let weights = merged.typography.font_weight.as_ref().unwrap();
    assert_eq!(weights.get("bold"), Some(&json!("700")));
    assert_eq!(weights.get("semibold"), Some(&json!("600")));

    // Extension sections are replaced, not merged.
    assert_eq!(merged.extension("borderRadius"), Some(&json!({ "lg": 16 })));

    // The bundle is untouched.
    assert_eq!(
        adapter.get_theme_value("light", "colors.primary", None),
        Some(json!("#007AFF"))
    );
}

#[test]
fn merge_with_empty_overrides_is_identity() {
    let adapter = create_adapter(&config()).unwrap();
    let base = adapter.theme("dark").unwrap().theme();
    assert_eq!(&merge_themes(base, &ThemeOverrides::new()), base);
}

// ============================================================================
// Responsive values
// ============================================================================

#[test]
fn responsive_step_function() {
    let adapter = create_adapter(&config()).unwrap();
    let columns = create_responsive_value([("xs", 1), ("md", 2), ("xl", 4)]);

    assert_eq!(adapter.select(&columns, 0.0), Some(&1));
    assert_eq!(adapter.select(&columns, 700.0), Some(&1));
    assert_eq!(adapter.select(&columns, 768.0), Some(&2));
    assert_eq!(adapter.select(&columns, 1199.0), Some(&2));
    assert_eq!(adapter.select(&columns, 5000.0), Some(&4));
}

#[test]
fn responsive_without_zero_entry() {
    let adapter = create_adapter(&config()).unwrap();
    let padding: ResponsiveValue<f64> = ResponsiveValue::new().at("md", 24.0);

    assert_eq!(adapter.select(&padding, 500.0), None);
    assert_eq!(adapter.select(&padding, 800.0), Some(&24.0));
}

#[test]
fn responsive_ignores_unknown_breakpoints() {
    let adapter = create_adapter(&config()).unwrap();
    let values = create_responsive_value([("xs", "small"), ("xxl", "huge")]);
    assert_eq!(adapter.select(&values, 10_000.0), Some(&"small"));
}

// ============================================================================
// Runtime hand-off
// ============================================================================

#[test]
fn register_hands_off_normalized_configuration() {
    let adapter = create_adapter(&config().settings(json!({ "adaptiveThemes": true }))).unwrap();
    let mut runtime = RecordingRuntime::default();

    adapter.register(&mut runtime).unwrap();

    assert_eq!(runtime.configured.len(), 1);
    let handed = &runtime.configured[0];
    let names: Vec<&str> = handed.breakpoints.names().collect();
    assert_eq!(names, vec!["xs", "sm", "md", "lg", "xl"]);
    assert_eq!(handed.themes.len(), 2);
    assert_eq!(handed.themes["dark"]["colors"]["primary"], json!("#0A84FF"));
    assert_eq!(handed.settings, Some(json!({ "adaptiveThemes": true })));
}

#[test]
fn register_propagates_runtime_error() {
    let adapter = create_adapter(&config()).unwrap();
    let mut runtime = RecordingRuntime {
        reject: true,
        ..Default::default()
    };

    let err = adapter.register(&mut runtime).unwrap_err();
    assert_eq!(err.to_string(), "runtime rejected configuration");
    assert!(runtime.configured.is_empty());
}

// ============================================================================
// Current theme state
// ============================================================================

#[test]
fn view_follows_provider_state() {
    let adapter = create_adapter(&config()).unwrap();
    let provider = ManualThemeProvider::new(&adapter, "light", 400.0).unwrap();
    let view = ThemeView::new(&adapter, &provider);
    let gutter = create_responsive_value([("xs", 8), ("lg", 24)]);

    assert_eq!(view.theme_name(), "light");
    assert_eq!(view.breakpoint().as_deref(), Some("xs"));
    assert_eq!(view.responsive(&gutter), Some(&8));
    assert_eq!(view.value("colors.background", None), Some(json!("#FFFFFF")));

    provider.set_theme("dark").unwrap();
    provider.set_width(1000.0);

    assert_eq!(view.breakpoint().as_deref(), Some("lg"));
    assert_eq!(view.responsive(&gutter), Some(&24));
    assert_eq!(view.value("colors.background", None), Some(json!("#000000")));
    assert_eq!(view.theme().unwrap().colors.text, "#FFFFFF");
}

#[test]
fn provider_notifies_subscribers() {
    let adapter = create_adapter(&config()).unwrap();
    let provider = ManualThemeProvider::new(&adapter, "light", 0.0).unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = provider.subscribe(Rc::new(move |snapshot: &RuntimeSnapshot| {
        sink.borrow_mut()
            .push((snapshot.theme.clone(), snapshot.breakpoint.clone()));
    }));

    provider.set_width(600.0);
    provider.set_theme("dark").unwrap();
    // No change, no notification.
    provider.set_theme("dark").unwrap();

    assert!(provider.unsubscribe(id));
    provider.set_theme("light").unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            ("light".to_string(), Some("sm".to_string())),
            ("dark".to_string(), Some("sm".to_string())),
        ]
    );
}

#[test]
fn provider_rejects_unknown_theme() {
    let adapter = create_adapter(&config()).unwrap();
    assert!(matches!(
        ManualThemeProvider::new(&adapter, "sepia", 0.0),
        Err(AdapterError::UnknownTheme { .. })
    ));

    let provider = ManualThemeProvider::new(&adapter, "light", 0.0).unwrap();
    assert_eq!(
        provider.set_theme("sepia"),
        Err(AdapterError::UnknownTheme {
            name: "sepia".to_string()
        })
    );
    assert_eq!(provider.get().theme, "light");
}
