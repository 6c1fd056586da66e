//! Environment override tests
//!
//! Each test runs inside a figment `Jail` so the variables it sets are
//! restored afterwards and never leak into other tests.

use figment::Jail;
use ragecalc::engine::attack_count;
use ragecalc::{BaseConfig, ConfigError};

#[test]
fn test_env_overrides_bundled_default() {
    Jail::expect_with(|jail| {
        jail.set_env("RAGECALC_BAB", 16);

        let config = BaseConfig::load(None).map_err(|e| e.to_string())?;
        assert_eq!(config.bab, 16);
        assert_eq!(attack_count(&config), 4);

        // Untouched fields keep the bundled values
        assert_eq!(config.strength, 20);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "build.toml",
            r#"
STR = 16
BAB = 6
WEAPON_BONUS = 1
DAMAGE_DIE = [1, 12]
WEAPON_CRITICAL_MOD = 3
TWO_HANDED_MULTI = 1.5
RAGE_STR_BONUS = 4
INSPIRE = 1
HASTE = 1
POWER_ATTACK_ATTACK = -2
POWER_ATTACK_DAMAGE = 4
FLANKING = 2
"#,
        )?;
        jail.set_env("RAGECALC_STR", 22);

        let path = jail.directory().join("build.toml");
        let config = BaseConfig::load(Some(&path)).map_err(|e| e.to_string())?;
        assert_eq!(config.strength, 22);
        assert_eq!(config.bab, 6);
        Ok(())
    });
}

#[test]
fn test_env_override_non_numeric() {
    Jail::expect_with(|jail| {
        jail.set_env("RAGECALC_BAB", "eleven");

        let err = BaseConfig::load(None).unwrap_err();
        match err {
            ConfigError::InvalidField { field, .. } => assert_eq!(field, "BAB"),
            other => panic!("expected InvalidField, got {:?}", other),
        }
        Ok(())
    });
}

#[test]
fn test_env_override_out_of_range() {
    Jail::expect_with(|jail| {
        jail.set_env("RAGECALC_WEAPON_CRITICAL_MOD", 50);

        let err = BaseConfig::load(None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field: "WEAPON_CRITICAL_MOD", .. }
        ));
        Ok(())
    });
}
