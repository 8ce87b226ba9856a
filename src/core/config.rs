//! Per-match rule configuration.
//!
//! Adapters build a `GameOptions` when a match starts. The options can be
//! embedded in a YAML config file (see `crate::config::AppConfig`); every
//! field has a default so partial sections load.

use serde::{Deserialize, Serialize};

/// Rule variants for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Rolling `max_roll` grants the same player another turn.
    #[serde(default)]
    pub bonus_turn_on_max: bool,

    /// Highest value the die can show.
    #[serde(default = "default_max_roll")]
    pub max_roll: u8,
}

fn default_max_roll() -> u8 {
    6
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            bonus_turn_on_max: false,
            max_roll: default_max_roll(),
        }
    }
}

impl GameOptions {
    /// Default options: no bonus turn, six-sided die.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the bonus turn on a maximum roll.
    #[must_use]
    pub fn with_bonus_turn_on_max(mut self, enabled: bool) -> Self {
        self.bonus_turn_on_max = enabled;
        self
    }

    /// Set the highest die value.
    #[must_use]
    pub fn with_max_roll(mut self, max_roll: u8) -> Self {
        self.max_roll = max_roll;
        self
    }

    /// Whether a roll of `steps` keeps the turn with the same player.
    #[must_use]
    pub fn grants_bonus_turn(&self, steps: u8) -> bool {
        self.bonus_turn_on_max && steps == self.max_roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GameOptions::new();
        assert!(!options.bonus_turn_on_max);
        assert_eq!(options.max_roll, 6);
        assert!(!options.grants_bonus_turn(6));
    }

    #[test]
    fn test_builder() {
        let options = GameOptions::new()
            .with_bonus_turn_on_max(true)
            .with_max_roll(8);
        assert!(options.grants_bonus_turn(8));
        assert!(!options.grants_bonus_turn(6));
    }

    #[test]
    fn test_partial_deserialize() {
        let options: GameOptions = serde_json::from_str(r#"{"bonus_turn_on_max": true}"#).unwrap();
        assert!(options.bonus_turn_on_max);
        assert_eq!(options.max_roll, 6);
    }
}
