//! Interactive calculator session
//!
//! Holds the current modifiers and hit count between user actions. Every
//! action goes through `dispatch`: build the next `ModifierState`, evaluate,
//! clamp the hit count, render.

use std::str::FromStr;

use tracing::debug;

use crate::config::BaseConfig;
use crate::engine::{self, CombatResult, Modifier, ModifierState, Readout};
use crate::error::CommandError;

/// Hit count used when none is given
pub const DEFAULT_HIT_COUNT: u32 = 1;

/// A single user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Flip one modifier
    Toggle(Modifier),
    /// Switch one modifier on or off
    Set(Modifier, bool),
    /// Change how many attacks land
    HitCount(u32),
}

/// A parsed line of interactive input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    /// Re-print the current readout
    Show,
    /// Print active modifiers and hit count
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let Some((first, rest)) = words.split_first() else {
            return Err(CommandError::Empty);
        };

        match (first.to_lowercase().as_str(), rest) {
            ("show" | "s", []) => Ok(Command::Show),
            ("status", []) => Ok(Command::Status),
            ("help" | "?" | "h", []) => Ok(Command::Help),
            ("quit" | "exit" | "q", []) => Ok(Command::Quit),
            ("hits" | "hit", [count]) => count
                .parse()
                .map(|n| Command::Event(Event::HitCount(n)))
                .map_err(|_| CommandError::InvalidHitCount(count.to_string())),
            ("toggle" | "t", [name]) => Ok(Command::Event(Event::Toggle(parse_modifier(name)?))),
            ("set", [name, switch]) => Ok(Command::Event(Event::Set(
                parse_modifier(name)?,
                parse_switch(switch)?,
            ))),
            (_, []) => match first.parse::<Modifier>() {
                Ok(m) => Ok(Command::Event(Event::Toggle(m))),
                Err(_) => Err(CommandError::Unknown(s.trim().to_string())),
            },
            (_, [switch]) => match first.parse::<Modifier>() {
                Ok(m) => Ok(Command::Event(Event::Set(m, parse_switch(switch)?))),
                Err(_) => Err(CommandError::Unknown(s.trim().to_string())),
            },
            _ => Err(CommandError::Unknown(s.trim().to_string())),
        }
    }
}

fn parse_modifier(name: &str) -> Result<Modifier, CommandError> {
    name.parse()
        .map_err(|_| CommandError::UnknownModifier(name.to_string()))
}

fn parse_switch(word: &str) -> Result<bool, CommandError> {
    match word.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(CommandError::InvalidSwitch(word.to_string())),
    }
}

/// A calculator session over one loaded configuration
#[derive(Debug, Clone)]
pub struct Session {
    config: BaseConfig,
    modifiers: ModifierState,
    hit_count: u32,
}

impl Session {
    /// Start a session; `hit_count` is clamped to the available attacks
    pub fn new(config: BaseConfig, modifiers: ModifierState, hit_count: u32) -> Self {
        let hit_count = hit_count.min(engine::max_hits(&config, &modifiers));
        Self {
            config,
            modifiers,
            hit_count,
        }
    }

    pub fn config(&self) -> &BaseConfig {
        &self.config
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    /// Current upper bound for the hit count
    pub fn max_hits(&self) -> u32 {
        engine::max_hits(&self.config, &self.modifiers)
    }

    /// Evaluate the current state
    pub fn evaluate(&self) -> CombatResult {
        engine::evaluate(&self.config, self.modifiers, self.hit_count)
    }

    /// Render the current state
    pub fn readout(&self) -> Readout {
        self.evaluate().render()
    }

    /// Apply one user action and return the refreshed readout
    pub fn dispatch(&mut self, event: Event) -> Readout {
        let (modifiers, requested_hits) = match event {
            Event::Toggle(m) => (self.modifiers.toggled(m), self.hit_count),
            Event::Set(m, active) => (self.modifiers.with(m, active), self.hit_count),
            Event::HitCount(n) => (self.modifiers, n),
        };

        let result = engine::evaluate(&self.config, modifiers, requested_hits);
        if result.hit_count != requested_hits {
            debug!(
                requested = requested_hits,
                max_hits = result.max_hits,
                "hit count clamped"
            );
        }

        self.modifiers = modifiers;
        self.hit_count = result.hit_count;
        debug!(?event, modifiers = %self.modifiers, hit_count = self.hit_count, "dispatched");

        result.render()
    }
}
