use bufy_config::{Config, ConfigError, ConfigManager, Theme};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert_eq!(cfg.currency, "INR");
    assert!(!cfg.locale.is_empty());
    assert_eq!(cfg.default_filter, "all");
    assert!(cfg.last_snapshot.is_none());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.currency = "USD".to_string();
    cfg.default_filter = "over".to_string();
    cfg.last_snapshot = Some(dir.path().join("account.json"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "USD");
    assert_eq!(loaded.default_filter, "over");
    assert_eq!(loaded.last_snapshot, cfg.last_snapshot);
    assert!(!dir.path().join(".config.json.partial").exists());
}

#[test]
fn missing_config_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    assert!(manager.config_path().ends_with("config/config.json"));
    let loaded = manager.load().expect("load defaults");
    assert_eq!(loaded.currency, "INR");
}

#[test]
fn partial_config_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"locale":"en-US","currency":"EUR","theme":"plain"}"#)
        .expect("write config");

    let loaded = ConfigManager::new(path).load().expect("load config");
    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.theme, Theme::Plain);
    assert!(loaded.ui_color_enabled);
    assert_eq!(loaded.default_filter, "all");
}

#[test]
fn malformed_config_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").expect("write config");

    let err = ConfigManager::new(path).load().unwrap_err();
    assert!(err.to_string().starts_with("Serialization error"));
}

#[test]
fn set_value_validates_and_normalizes() {
    let mut cfg = Config::default();

    cfg.set_value("currency", "eur").expect("valid currency");
    cfg.set_value("color", "off").expect("valid toggle");
    cfg.set_value("default_filter", "Under").expect("valid filter");
    cfg.set_value("theme", "plain").expect("theme");

    assert_eq!(cfg.currency, "EUR");
    assert!(!cfg.ui_color_enabled);
    assert_eq!(cfg.default_filter, "under");
    assert_eq!(cfg.theme, Theme::Plain);

    assert!(matches!(
        cfg.set_value("currency", "euro"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        cfg.set_value("default_filter", "sideways"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        cfg.set_value("timezone", "UTC"),
        Err(ConfigError::UnknownKey(_))
    ));
    assert_eq!(cfg.currency, "EUR");
}
