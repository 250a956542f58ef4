//! Configuration system tests
//!
//! Tests for config paths and trigger config loading/saving.

use socialtext::config_paths;
use socialtext::{Trigger, TriggerConfig, TriggerSet};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
        assert!(path.to_string_lossy().contains("socialtext"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Trigger Config Tests
// ========================================================================

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = TriggerConfig {
        mention_enabled: false,
        hashtag_symbol: '$',
        threshold: 3,
        ..TriggerConfig::default()
    };
    config.save_to(&path).unwrap();

    let loaded = TriggerConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_default_symbols_survive_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    TriggerConfig::default().save_to(&path).unwrap();
    assert_eq!(TriggerConfig::load_from(&path).unwrap(), TriggerConfig::default());
}

#[test]
fn test_load_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "hashtag_enabled: false\nmax_suggestions: 3\n").unwrap();

    let config = TriggerConfig::load_from(&path).unwrap();
    assert!(!config.hashtag_enabled);
    assert!(config.mention_enabled);
    assert_eq!(config.max_suggestions, 3);

    let set = TriggerSet::from_config(&config);
    assert!(!set.is_enabled(Trigger::Hashtag));
    assert_eq!(set.symbol_for(Trigger::Mention), Some('@'));
}

#[test]
fn test_load_malformed_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "threshold: [not a number\n").unwrap();
    assert!(TriggerConfig::load_from(&path).is_err());
}

#[test]
fn test_load_rejects_shared_symbols() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "hashtag_symbol: '@'\n").unwrap();
    let err = TriggerConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("share the symbol"));
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(TriggerConfig::load_from(&dir.path().join("absent.yaml")).is_err());
}
