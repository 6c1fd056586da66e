//! Rules engine
//!
//! Derives a build's combat numbers from its base stats and the active
//! situational modifiers:
//! - Effective strength bonus (size, rage)
//! - Attack bonus sequence (iteratives, haste, power attack, flanking)
//! - Per-hit and critical damage expressions
//!
//! Everything here is pure. The same inputs always give the same result.

mod expression;
mod modifiers;
mod result;
mod rules;

pub use expression::DamageExpression;
pub use modifiers::{Modifier, ModifierState};
pub use result::{CombatResult, Readout};
pub use rules::{
    attack_bonus, attack_count, attack_sequence, critical_damage, damage,
    effective_strength_bonus, evaluate, max_hits,
};
