//! Evaluation results and their text rendering

use serde::Serialize;

use super::expression::DamageExpression;
use super::modifiers::ModifierState;

/// Result of evaluating one round. A fresh value per evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatResult {
    /// Modifiers the round was evaluated with
    pub modifiers: ModifierState,
    /// Every attack bonus available in the round, in order
    pub attack_bonuses: Vec<i32>,
    /// Damage of a single hit
    pub damage: DamageExpression,
    /// Damage of a single critical hit
    pub critical_damage: DamageExpression,
    /// Weapon critical multiplier used for `critical_damage`
    pub critical_multiplier: u32,
    /// Upper bound for `hit_count`
    pub max_hits: u32,
    /// Number of attacks that land, already clamped to `max_hits`
    pub hit_count: u32,
}

impl CombatResult {
    /// Damage of `hit_count` hits
    pub fn total_damage(&self) -> DamageExpression {
        self.damage.scaled(self.hit_count)
    }

    /// Damage of `hit_count` critical hits
    pub fn total_critical_damage(&self) -> DamageExpression {
        self.critical_damage.scaled(self.hit_count)
    }

    /// Render the three display lines
    pub fn render(&self) -> Readout {
        Readout {
            attack: attack_text(&self.attack_bonuses),
            damage: format!("Damage: {}", self.total_damage()),
            critical: format!("Critical Damage: {}", self.total_critical_damage()),
        }
    }
}

/// The three lines shown to the user after every change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub attack: String,
    pub damage: String,
    pub critical: String,
}

impl std::fmt::Display for Readout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.attack)?;
        writeln!(f, "{}", self.damage)?;
        write!(f, "{}", self.critical)
    }
}

/// "Attack Bonus: +19/14/9"
fn attack_text(bonuses: &[i32]) -> String {
    let joined: Vec<String> = bonuses.iter().map(|b| b.to_string()).collect();
    format!("Attack Bonus: +{}", joined.join("/"))
}
