//! ragecalc - combat statistics calculator
//!
//! Derives the attack bonus sequence, damage and critical damage of a
//! melee build from its base stats and a handful of situational toggles
//! (rage, power attack, haste, ...).

pub mod config;
pub mod engine;
pub mod error;
pub mod session;

pub use config::{BaseConfig, DamageDie};
pub use engine::{evaluate, CombatResult, DamageExpression, Modifier, ModifierState, Readout};
pub use error::{CommandError, ConfigError};
pub use session::{Command, Event, Session};
