//! Match configuration.
//!
//! Every tunable constant of a match lives here instead of in globals.
//! The defaults reproduce the standard ruleset.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Starting (and maximum) player health.
    pub max_player_hp: i32,

    /// Mana ceiling reached by the per-turn increase.
    pub max_mana: u32,

    /// Mana both players start the first turn with.
    pub starting_mana: u32,

    /// Exact number of cards a deck must contain.
    pub deck_size: usize,

    /// Number of field slots per player.
    pub field_size: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_player_hp: 100,
            max_mana: 10,
            starting_mana: 3,
            deck_size: 20,
            field_size: 5,
        }
    }
}

impl MatchConfig {
    /// Set the starting player health.
    #[must_use]
    pub fn with_max_player_hp(mut self, hp: i32) -> Self {
        self.max_player_hp = hp;
        self
    }

    /// Set the mana ceiling.
    #[must_use]
    pub fn with_max_mana(mut self, mana: u32) -> Self {
        self.max_mana = mana;
        self
    }

    /// Set the first-turn mana.
    #[must_use]
    pub fn with_starting_mana(mut self, mana: u32) -> Self {
        self.starting_mana = mana;
        self
    }

    /// Set the required deck size.
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    /// Set the number of field slots.
    #[must_use]
    pub fn with_field_size(mut self, size: usize) -> Self {
        self.field_size = size;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_player_hp <= 0 {
            return Err(ConfigError::InvalidConfig(format!(
                "max_player_hp must be positive, got {}",
                self.max_player_hp
            )));
        }
        if self.field_size == 0 {
            return Err(ConfigError::InvalidConfig("field_size must be at least 1".into()));
        }
        if self.deck_size == 0 {
            return Err(ConfigError::InvalidConfig("deck_size must be at least 1".into()));
        }
        if self.starting_mana > self.max_mana {
            return Err(ConfigError::InvalidConfig(format!(
                "starting_mana ({}) exceeds max_mana ({})",
                self.starting_mana, self.max_mana
            )));
        }
        Ok(())
    }
}
