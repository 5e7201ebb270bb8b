//! Integration tests for configuration management

use qbank::config::{Config, ConfigOverrides};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.store.resources_file.is_empty(),
        "Default resources_file should not be empty"
    );
    assert!(
        !config.store.events_file.is_empty(),
        "Default events_file should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[store]
resources_file = "/data/resources.json"
events_file = "/data/events.json"

[paths]
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.store.resources_file, "/data/resources.json");
    assert_eq!(config.store.events_file, "/data/events.json");
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    // Only [logging] is required; other sections fall back to empty values
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.store.resources_file, "");
    assert_eq!(config.paths.reports_dir, "");
}

#[test]
fn test_config_rejects_malformed_toml() {
    assert!(Config::from_toml("[logging\nlevel = ").is_err());
    assert!(Config::from_toml("[logging]\nverbose = \"sometimes\"").is_err());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$QBANK/qbank.log"

[store]
resources_file = "$QBANK/data/resources.json"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");
    let dir = Config::get_qbank_dir();

    assert!(!config.logging.file.contains("$QBANK"));
    assert!(config.logging.file.starts_with(&*dir.to_string_lossy()));
    assert!(config.store.resources_file.ends_with("resources.json"));
    assert!(!config.store.resources_file.contains("$QBANK"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "DEBUG").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");
    assert!(config.set("level", "loud").is_err());

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.set("verbose", "maybe").is_err());

    config
        .set("resources-file", "/srv/resources.json")
        .expect("Failed to set resources file");
    assert_eq!(config.get("resources_file").unwrap(), "/srv/resources.json");

    config
        .set("reports_dir", "/srv/reports")
        .expect("Failed to set reports dir");
    assert_eq!(config.get("reports-dir").unwrap(), "/srv/reports");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("events_file", "/tmp/other.json").expect("Failed to set");
    assert_eq!(config.store.events_file, "/tmp/other.json");

    config.unset("events_file", &defaults).expect("Failed to unset");
    assert_eq!(config.store.events_file, defaults.store.events_file);

    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_toml_round_trip_through_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("events_file", "/srv/events.json").expect("Failed to set events");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.store.events_file, "/srv/events.json");
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        resources_file: Some("./r.json".to_string()),
        events_file: Some("./e.json".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.store.resources_file, "./r.json");
    assert_eq!(config.store.events_file, "./e.json");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let original = config.clone();

    config.apply_overrides(&ConfigOverrides {
        resources_file: Some("./only.json".to_string()),
        ..Default::default()
    });

    assert_eq!(config.store.resources_file, "./only.json");
    assert_eq!(config.logging.level, original.logging.level);
    assert_eq!(config.store.events_file, original.store.events_file);
    assert_eq!(config.paths.reports_dir, original.paths.reports_dir);
}

#[test]
fn test_merge_defaults_fills_only_empty_fields() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_toml(
        r#"
[logging]
level = "error"
"#,
    )
    .expect("Failed to parse");

    assert!(config.merge_defaults(&defaults), "empty fields should be filled");
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.store.resources_file, defaults.store.resources_file);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);

    assert!(!config.merge_defaults(&defaults), "second merge should change nothing");
}

#[test]
fn test_config_display_lists_sections() {
    let shown = Config::from_defaults().to_string();
    assert!(shown.contains("[logging]"));
    assert!(shown.contains("[store]"));
    assert!(shown.contains("resources_file"));
    assert!(shown.contains("[paths]"));
}
