//! Configuration loading tests
//!
//! Writes configuration files to a temp dir and loads them the way the
//! binary does at startup.

use std::fs;

use ragecalc::config::DEFAULT_CONFIGURATION;
use ragecalc::{BaseConfig, ConfigError, DamageDie};
use tempfile::TempDir;

#[test]
fn test_load_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("configuration.json");
    fs::write(&path, DEFAULT_CONFIGURATION).unwrap();

    let config = BaseConfig::load(Some(&path)).unwrap();
    assert_eq!(config.strength, 20);
    assert_eq!(config.damage_die, DamageDie::new(2, 6));
}

#[test]
fn test_load_toml_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("build.toml");
    fs::write(
        &path,
        r#"
STR = 16
BAB = 16
WEAPON_BONUS = 2
DAMAGE_DIE = [1, 12]
WEAPON_CRITICAL_MOD = 3
TWO_HANDED_MULTI = 1.5
RAGE_STR_BONUS = 6
INSPIRE = 3
HASTE = 1
POWER_ATTACK_ATTACK = -5
POWER_ATTACK_DAMAGE = 10
FLANKING = 2
"#,
    )
    .unwrap();

    let config = BaseConfig::load(Some(&path)).unwrap();
    assert_eq!(config.bab, 16);
    assert_eq!(config.damage_die, DamageDie::new(1, 12));
    assert_eq!(config.rage_str_bonus, 6);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.json");

    let err = BaseConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_load_incomplete_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("configuration.json");
    fs::write(&path, r#"{ "STR": 20, "BAB": 11 }"#).unwrap();

    let err = BaseConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::MissingField(_)));
    assert!(err.to_string().starts_with("missing configuration field"));
}

#[test]
fn test_load_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("configuration.json");
    fs::write(&path, "{ this is not json").unwrap();

    assert!(BaseConfig::load(Some(&path)).is_err());
}

#[test]
fn test_load_wrong_die_shape() {
    let source = DEFAULT_CONFIGURATION.replace("[2, 6]", "\"2d6\"");
    let err = BaseConfig::from_json(&source).unwrap_err();
    match err {
        ConfigError::InvalidField { field, .. } => assert_eq!(field, "DAMAGE_DIE"),
        other => panic!("expected InvalidField, got {:?}", other),
    }
}

#[test]
fn test_bundled_default_loads() {
    let config = BaseConfig::load(None).unwrap();
    assert_eq!(config, BaseConfig::from_json(DEFAULT_CONFIGURATION).unwrap());
}
