//! Damage expressions
//!
//! A dice-plus-flat-bonus value like "2d6 + 8". Scaling multiplies both the
//! dice count and the bonus, which is how hit counts and critical
//! multipliers combine.

use serde::Serialize;

use crate::config::DamageDie;

/// Damage for one or more hits, e.g. "2d6 + 8"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DamageExpression {
    /// Number of dice to roll
    pub count: u32,
    /// Number of sides per die
    pub sides: u32,
    /// Flat bonus added to the dice total
    pub bonus: i32,
}

impl DamageExpression {
    /// Create a new damage expression
    pub fn new(count: u32, sides: u32, bonus: i32) -> Self {
        Self { count, sides, bonus }
    }

    /// Expression for the given dice plus a flat bonus
    pub fn from_die(die: DamageDie, bonus: i32) -> Self {
        Self::new(die.count, die.sides, bonus)
    }

    /// Multiply dice count and bonus by `factor`, saturating at the type bounds
    pub fn scaled(&self, factor: u32) -> Self {
        let bonus_factor = i32::try_from(factor).unwrap_or(i32::MAX);
        Self {
            count: self.count.saturating_mul(factor),
            sides: self.sides,
            bonus: self.bonus.saturating_mul(bonus_factor),
        }
    }
}

impl std::fmt::Display for DamageExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{} + {}", self.count, self.sides, self.bonus)
    }
}
