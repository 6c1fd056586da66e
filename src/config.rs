//! Base character configuration
//!
//! The build's fixed numbers, loaded once at startup from JSON or TOML with
//! `RAGECALC_*` environment overrides layered on top. Field names match the
//! upper-case keys of the configuration file.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Json, Toml};
use figment::Figment;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ConfigError;

/// Configuration bundled into the binary, used when no file is found
pub const DEFAULT_CONFIGURATION: &str = include_str!("../data/configuration.json");

/// File looked up next to the executable when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "configuration.json";

/// Prefix for environment overrides, e.g. `RAGECALC_BAB=16`
pub const ENV_PREFIX: &str = "RAGECALC_";

/// Highest accepted base attack bonus (at most 20 attacks plus haste)
pub const MAX_BAB: i32 = 100;

/// Largest magnitude accepted for strength and the flat bonus fields
pub const MAX_STAT: i32 = 1_000;

pub const MAX_DICE: u32 = 100;

pub const MAX_DIE_SIDES: u32 = 1_000;

pub const MAX_CRITICAL_MOD: u32 = 20;

pub const MAX_TWO_HANDED_MULTI: f64 = 10.0;

/// Weapon damage dice, written as `[count, sides]` in the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "(u32, u32)")]
pub struct DamageDie {
    /// Number of dice rolled per hit
    pub count: u32,
    /// Number of sides per die
    pub sides: u32,
}

impl DamageDie {
    pub fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }
}

impl From<(u32, u32)> for DamageDie {
    fn from((count, sides): (u32, u32)) -> Self {
        Self { count, sides }
    }
}

/// Base stats for the character build. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct BaseConfig {
    /// Base strength score
    #[serde(rename = "STR")]
    pub strength: i32,
    /// Base attack bonus
    pub bab: i32,
    /// Enhancement bonus, applied to attack and damage
    pub weapon_bonus: i32,
    pub damage_die: DamageDie,
    /// Critical multiplier for dice count and flat bonus
    pub weapon_critical_mod: u32,
    /// Applied to strength and power attack damage when wielding two-handed
    pub two_handed_multi: f64,
    pub rage_str_bonus: i32,
    pub inspire: i32,
    pub haste: i32,
    /// Attack contribution of power attack (usually negative)
    pub power_attack_attack: i32,
    pub power_attack_damage: i32,
    pub flanking: i32,
}

impl BaseConfig {
    /// Load from a file, or from the bundled default when `path` is `None`.
    ///
    /// Environment overrides are merged on top in both cases.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
        }

        let config: BaseConfig = Self::figment(path).extract()?;
        config.validate()?;

        match path {
            Some(path) => info!("Loaded configuration from {}", path.display()),
            None => info!("Loaded bundled default configuration"),
        }
        debug!(?config, "base configuration");

        Ok(config)
    }

    /// Parse a JSON document directly, without environment overrides
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: BaseConfig = Figment::from(Json::string(source)).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document directly, without environment overrides
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: BaseConfig = Figment::from(Toml::string(source)).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the provider stack: file (or bundled default), then environment
    pub fn figment(path: Option<&Path>) -> Figment {
        let base = match path {
            Some(path) if is_toml(path) => Figment::from(Toml::file(path)),
            Some(path) => Figment::from(Json::file(path)),
            None => Figment::from(Json::string(DEFAULT_CONFIGURATION)),
        };

        // File keys are upper case, so keep env keys as written
        base.merge(Env::prefixed(ENV_PREFIX).lowercase(false))
    }

    /// Reject values the rules cannot work with.
    ///
    /// Every field is bounded so that scaling a round's damage by the
    /// critical multiplier and the hit count stays within `i32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("BAB", self.bab, 0, MAX_BAB)?;
        check_range("STR", self.strength, -MAX_STAT, MAX_STAT)?;
        check_range("WEAPON_BONUS", self.weapon_bonus, -MAX_STAT, MAX_STAT)?;
        check_range("RAGE_STR_BONUS", self.rage_str_bonus, -MAX_STAT, MAX_STAT)?;
        check_range("INSPIRE", self.inspire, -MAX_STAT, MAX_STAT)?;
        check_range("HASTE", self.haste, -MAX_STAT, MAX_STAT)?;
        check_range("POWER_ATTACK_ATTACK", self.power_attack_attack, -MAX_STAT, MAX_STAT)?;
        check_range("POWER_ATTACK_DAMAGE", self.power_attack_damage, -MAX_STAT, MAX_STAT)?;
        check_range("FLANKING", self.flanking, -MAX_STAT, MAX_STAT)?;

        if !(1..=MAX_DICE).contains(&self.damage_die.count) {
            return Err(ConfigError::InvalidValue {
                field: "DAMAGE_DIE",
                reason: format!(
                    "dice count must be between 1 and {}, got {}",
                    MAX_DICE, self.damage_die.count
                ),
            });
        }
        if !(1..=MAX_DIE_SIDES).contains(&self.damage_die.sides) {
            return Err(ConfigError::InvalidValue {
                field: "DAMAGE_DIE",
                reason: format!(
                    "die sides must be between 1 and {}, got {}",
                    MAX_DIE_SIDES, self.damage_die.sides
                ),
            });
        }
        if !(1..=MAX_CRITICAL_MOD).contains(&self.weapon_critical_mod) {
            return Err(ConfigError::InvalidValue {
                field: "WEAPON_CRITICAL_MOD",
                reason: format!(
                    "must be between 1 and {}, got {}",
                    MAX_CRITICAL_MOD, self.weapon_critical_mod
                ),
            });
        }
        if !(0.0..=MAX_TWO_HANDED_MULTI).contains(&self.two_handed_multi) {
            return Err(ConfigError::InvalidValue {
                field: "TWO_HANDED_MULTI",
                reason: format!(
                    "must be between 0 and {}, got {}",
                    MAX_TWO_HANDED_MULTI, self.two_handed_multi
                ),
            });
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: i32, min: i32, max: i32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be between {} and {}, got {}", min, max, value),
        })
    }
}

/// `configuration.json` beside the running executable, if there is one
pub fn locate_default() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let path = exe.parent()?.join(CONFIG_FILE_NAME);
    path.exists().then_some(path)
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}
