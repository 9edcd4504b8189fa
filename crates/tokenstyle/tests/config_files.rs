//! Loading configuration and overrides from disk.

use std::fs;

use serde_json::json;
use tempfile::TempDir;
use tokenstyle::{AdapterConfig, AdapterError, ConfigError, ThemeOverrides};

const TOKENS_YAML: &str = r##"
themes:
  light:
    colors:
      primary: "#007AFF"
      secondary: "#5856D6"
      background: "#FFFFFF"
      surface: "#F2F2F7"
      text: "#000000"
      textSecondary: "#8E8E93"
    spacing: { xs: 4, sm: 8, md: 16, lg: 24, xl: 32 }
    typography:
      fontSize: { sm: 12, md: 14, lg: 18, xl: 24 }
breakpoints:
  md: 768
  xs: 0
"##;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "tokens.yaml", TOKENS_YAML);

    let adapter = AdapterConfig::from_file(&path).unwrap().build().unwrap();
    let names: Vec<&str> = adapter.breakpoints().names().collect();
    assert_eq!(names, vec!["xs", "md"]);
    assert_eq!(
        adapter.get_theme_value("light", "colors.textSecondary", None),
        Some(json!("#8E8E93"))
    );
}

#[test]
fn loads_json_file() {
    let dir = TempDir::new().unwrap();
    let yaml: serde_json::Value = serde_yaml::from_str(TOKENS_YAML).unwrap();
    let path = write(&dir, "tokens.json", &yaml.to_string());

    let config = AdapterConfig::from_file(&path).unwrap();
    assert_eq!(config, AdapterConfig::from_yaml(TOKENS_YAML).unwrap());
}

#[test]
fn unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "tokens.toml", "");

    match AdapterConfig::from_file(&path) {
        Err(ConfigError::UnsupportedFormat { path: reported }) => assert_eq!(reported, path),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yml");

    let err = AdapterConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.yml"));
}

#[test]
fn parse_error_carries_path() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.json", "{ \"themes\": ");

    match AdapterConfig::from_file(&path) {
        Err(ConfigError::Parse { path: Some(reported), .. }) => assert_eq!(reported, path),
        other => panic!("expected Parse with path, got {:?}", other),
    }
}

#[test]
fn file_that_parses_can_still_fail_construction() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "tokens.yml",
        "themes:\n  light:\n    colors: {}\nbreakpoints:\n  xs: 0\n",
    );

    let config = AdapterConfig::from_file(&path).unwrap();
    assert_eq!(
        config.build(),
        Err(AdapterError::InvalidThemeStructure {
            name: "light".to_string()
        })
    );
}

#[test]
fn loads_overrides_file() {
    let dir = TempDir::new().unwrap();
    let tokens = write(&dir, "tokens.yaml", TOKENS_YAML);
    let brand = write(
        &dir,
        "brand.yaml",
        "colors:\n  primary: \"#FF2D55\"\nspacing:\n  md: 20\n",
    );

    let adapter = AdapterConfig::from_file(&tokens).unwrap().build().unwrap();
    let overrides = ThemeOverrides::from_file(&brand).unwrap();
    let merged = adapter.merge_theme("light", &overrides).unwrap();

    assert_eq!(merged.colors.primary, "#FF2D55");
    assert_eq!(merged.colors.secondary, "#5856D6");
    assert_eq!(merged.spacing.md, 20.0);
    assert_eq!(merged.spacing.lg, 24.0);
}
