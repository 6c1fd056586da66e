//! Situational modifiers
//!
//! The seven toggles a player can flip between rounds. `ModifierState` is a
//! plain value: changing a flag yields a new state.

use serde::Serialize;
use std::str::FromStr;

/// A single togglable modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Wielding the weapon in both hands
    TwoHanded,
    /// Reduced to medium size
    MediumSize,
    /// Under a bard's inspire courage
    InspireCourage,
    /// Hasted
    Haste,
    /// Raging
    Raging,
    /// Power attacking
    PowerAttack,
    /// Flanking the target
    Flanking,
}

impl Modifier {
    /// Get all modifiers in display order
    pub fn all() -> &'static [Modifier] {
        &[
            Modifier::TwoHanded,
            Modifier::MediumSize,
            Modifier::InspireCourage,
            Modifier::Haste,
            Modifier::Raging,
            Modifier::PowerAttack,
            Modifier::Flanking,
        ]
    }

    /// Canonical name, also accepted by `from_str`
    pub fn name(&self) -> &'static str {
        match self {
            Modifier::TwoHanded => "two-handed",
            Modifier::MediumSize => "medium-size",
            Modifier::InspireCourage => "inspire-courage",
            Modifier::Haste => "haste",
            Modifier::Raging => "raging",
            Modifier::PowerAttack => "power-attack",
            Modifier::Flanking => "flanking",
        }
    }
}

impl FromStr for Modifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "two-handed" | "twohanded" | "2h" => Ok(Modifier::TwoHanded),
            "medium-size" | "medium" | "mediumsize" => Ok(Modifier::MediumSize),
            "inspire-courage" | "inspire" | "courage" => Ok(Modifier::InspireCourage),
            "haste" | "hasted" => Ok(Modifier::Haste),
            "raging" | "rage" => Ok(Modifier::Raging),
            "power-attack" | "powerattack" | "pa" => Ok(Modifier::PowerAttack),
            "flanking" | "flank" => Ok(Modifier::Flanking),
            _ => Err(format!("unknown modifier: {}", s.trim())),
        }
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which modifiers are active. Every combination is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ModifierState {
    pub two_handed: bool,
    pub medium_size: bool,
    pub inspire_courage: bool,
    pub haste: bool,
    pub raging: bool,
    pub power_attack: bool,
    pub flanking: bool,
}

impl ModifierState {
    /// All modifiers off
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a modifier is active
    pub fn is_active(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::TwoHanded => self.two_handed,
            Modifier::MediumSize => self.medium_size,
            Modifier::InspireCourage => self.inspire_courage,
            Modifier::Haste => self.haste,
            Modifier::Raging => self.raging,
            Modifier::PowerAttack => self.power_attack,
            Modifier::Flanking => self.flanking,
        }
    }

    /// A copy of this state with one modifier set
    pub fn with(self, modifier: Modifier, active: bool) -> Self {
        let mut next = self;
        let flag = match modifier {
            Modifier::TwoHanded => &mut next.two_handed,
            Modifier::MediumSize => &mut next.medium_size,
            Modifier::InspireCourage => &mut next.inspire_courage,
            Modifier::Haste => &mut next.haste,
            Modifier::Raging => &mut next.raging,
            Modifier::PowerAttack => &mut next.power_attack,
            Modifier::Flanking => &mut next.flanking,
        };
        *flag = active;
        next
    }

    /// A copy of this state with one modifier flipped
    pub fn toggled(self, modifier: Modifier) -> Self {
        self.with(modifier, !self.is_active(modifier))
    }

    /// Active modifiers in display order
    pub fn active(&self) -> Vec<Modifier> {
        Modifier::all()
            .iter()
            .copied()
            .filter(|m| self.is_active(*m))
            .collect()
    }
}

impl FromIterator<Modifier> for ModifierState {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ModifierState::new(), |state, m| state.with(m, true))
    }
}

impl std::fmt::Display for ModifierState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let active = self.active();
        if active.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = active.iter().map(|m| m.name()).collect();
        write!(f, "{}", names.join(", "))
    }
}
