//! Rules evaluation
//!
//! Pure functions from base stats and active modifiers to attack bonuses and
//! damage. Integer division truncates toward zero throughout, so a strength
//! of 9 gives a bonus of 0, not -1.

use tracing::debug;

use super::expression::DamageExpression;
use super::modifiers::ModifierState;
use super::result::CombatResult;
use crate::config::BaseConfig;

/// Strength lost when reduced to medium size
pub const MEDIUM_SIZE_STR_PENALTY: i32 = 2;

/// Attack bonus for being medium size
pub const MEDIUM_SIZE_ATTACK_BONUS: i32 = 1;

/// Extra attack penalty from reckless rage (power attack while raging)
pub const RECKLESS_RAGE_ATTACK_PENALTY: i32 = 1;

/// Extra damage from reckless rage (power attack while raging)
pub const RECKLESS_RAGE_DAMAGE_BONUS: i32 = 3;

/// Penalty applied to each iterative attack after the first
pub const ITERATIVE_ATTACK_PENALTY: i32 = 5;

/// Base attack bonus needed per extra iterative attack
pub const BAB_PER_ATTACK: i32 = 5;

/// Strength modifier after size and rage adjustments
pub fn effective_strength_bonus(config: &BaseConfig, modifiers: &ModifierState) -> i32 {
    let mut strength = config.strength;

    if modifiers.medium_size {
        strength -= MEDIUM_SIZE_STR_PENALTY;
    }
    if modifiers.raging {
        strength += config.rage_str_bonus;
    }

    (strength - 10) / 2
}

/// Attacks per round from base attack bonus: one more per 5 points
pub fn attack_count(config: &BaseConfig) -> u32 {
    // Validation rejects negative BAB, so this is never below 1
    (1 + (config.bab - 1) / BAB_PER_ATTACK).max(1) as u32
}

/// Full attack bonus of the first attack in the round
pub fn attack_bonus(config: &BaseConfig, modifiers: &ModifierState, strength_bonus: i32) -> i32 {
    let mut bonus = config.bab + config.weapon_bonus + strength_bonus;

    if modifiers.inspire_courage {
        bonus += config.inspire;
    }

    if modifiers.haste {
        bonus += config.haste;
    }

    if modifiers.power_attack {
        bonus += config.power_attack_attack;

        if modifiers.raging {
            bonus -= RECKLESS_RAGE_ATTACK_PENALTY;
        }
    }

    if modifiers.flanking {
        bonus += config.flanking;
    }

    if modifiers.medium_size {
        bonus += MEDIUM_SIZE_ATTACK_BONUS;
    }

    bonus
}

/// Every attack bonus available in the round, in order
///
/// Haste adds a second attack at the full bonus before the iterative ones.
pub fn attack_sequence(config: &BaseConfig, modifiers: &ModifierState) -> Vec<i32> {
    let strength_bonus = effective_strength_bonus(config, modifiers);
    let base = attack_bonus(config, modifiers, strength_bonus);
    let count = attack_count(config);

    let mut sequence = Vec::with_capacity(max_hits(config, modifiers) as usize);
    sequence.push(base);
    if modifiers.haste {
        sequence.push(base);
    }
    for i in 1..count as i32 {
        sequence.push(base - ITERATIVE_ATTACK_PENALTY * i);
    }

    sequence
}

/// Upper bound for the hit count: one per available attack
pub fn max_hits(config: &BaseConfig, modifiers: &ModifierState) -> u32 {
    attack_count(config) + u32::from(modifiers.haste)
}

/// Damage of a single hit
pub fn damage(
    config: &BaseConfig,
    modifiers: &ModifierState,
    strength_bonus: i32,
) -> DamageExpression {
    let mut bonus = config.weapon_bonus;

    bonus += two_handed_scaled(config, modifiers, strength_bonus);

    if modifiers.power_attack {
        bonus += two_handed_scaled(config, modifiers, config.power_attack_damage);

        if modifiers.raging {
            bonus += RECKLESS_RAGE_DAMAGE_BONUS;
        }
    }

    if modifiers.inspire_courage {
        bonus += config.inspire;
    }

    DamageExpression::from_die(config.damage_die, bonus)
}

/// Critical damage of a single hit: dice and bonus times the weapon multiplier
pub fn critical_damage(config: &BaseConfig, single_hit: &DamageExpression) -> DamageExpression {
    single_hit.scaled(config.weapon_critical_mod)
}

/// Evaluate the full round for the given modifiers.
///
/// `hit_count` is clamped to `[0, max_hits]` and only recorded for rendering;
/// it does not affect the attack sequence or the per-hit damage.
pub fn evaluate(config: &BaseConfig, modifiers: ModifierState, hit_count: u32) -> CombatResult {
    let strength_bonus = effective_strength_bonus(config, &modifiers);
    let max_hits = max_hits(config, &modifiers);
    let single_hit = damage(config, &modifiers, strength_bonus);

    let result = CombatResult {
        modifiers,
        attack_bonuses: attack_sequence(config, &modifiers),
        damage: single_hit,
        critical_damage: critical_damage(config, &single_hit),
        critical_multiplier: config.weapon_critical_mod,
        max_hits,
        hit_count: hit_count.min(max_hits),
    };

    debug!(
        modifiers = %modifiers,
        strength_bonus,
        attacks = ?result.attack_bonuses,
        damage = %result.damage,
        "evaluated round"
    );

    result
}

/// Two-handed scaling truncates toward zero, e.g. 5 * 1.5 = 7
fn two_handed_scaled(config: &BaseConfig, modifiers: &ModifierState, value: i32) -> i32 {
    if modifiers.two_handed {
        (value as f64 * config.two_handed_multi) as i32
    } else {
        value
    }
}
