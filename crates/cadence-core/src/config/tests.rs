//! Tests for configuration module.

use super::*;

fn settings_with_zone(zone: &str) -> Settings {
    Settings {
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        display: DisplayConfig {
            timezone: zone.to_string(),
        },
        query: QueryConfig { window_days: 14 },
    }
}

#[test_log::test]
fn test_defaults_without_file() {
    tracing::debug!("Loading settings without a config file");

    let settings = Settings::load("does-not-exist.toml").unwrap();

    assert_eq!(settings.display.timezone, "UTC");
    assert_eq!(settings.query.window_days(), 30);
    assert!(!settings.logging.level.is_empty());
}

#[test]
fn test_timezone_resolves_iana_name() {
    let settings = settings_with_zone("America/New_York");
    assert_eq!(settings.timezone().unwrap(), chrono_tz::America::New_York);
}

#[test]
fn test_timezone_rejects_unknown_zone() {
    let settings = settings_with_zone("Mars/Olympus_Mons");
    let err = settings.timezone().unwrap_err();
    assert!(matches!(err, CoreError::InvalidConfiguration(_)));
}

#[test]
fn test_zero_window_days_is_clamped() {
    let query = QueryConfig { window_days: 0 };
    assert_eq!(query.window_days(), 1);
}

#[test]
fn test_settings_clone() {
    let settings = settings_with_zone("Europe/Berlin");
    let cloned = settings.clone();
    assert_eq!(cloned.display.timezone, settings.display.timezone);
    assert_eq!(cloned.query.window_days, 14);
}

#[test]
fn test_invalid_file_value_is_config_error() {
    let path = std::env::temp_dir().join(format!("cadence-bad-{}.toml", std::process::id()));
    std::fs::write(&path, "[query]\nwindow_days = \"soon\"\n").unwrap();

    let result = Settings::load(path.to_str().unwrap());
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(CoreError::ConfigError(_))));
}
