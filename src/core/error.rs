//! Error types for match construction.
//!
//! All failures are caught before the first turn runs. Once a match
//! exists, turn advancement has no error path.

use thiserror::Error;

use super::player::PlayerId;

/// A single problem with one player's deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Deck does not contain exactly the required number of cards.
    #[error("{player}: has {actual} cards (needs exactly {expected})")]
    DeckSize {
        /// Offending player.
        player: PlayerId,
        /// Required deck size.
        expected: usize,
        /// Actual deck size.
        actual: usize,
    },

    /// Deck names cards that are not in the catalog.
    #[error("{player}: invalid card(s): {}", .names.join(", "))]
    UnknownCards {
        /// Offending player.
        player: PlayerId,
        /// Unknown names, deduplicated, in first-seen order.
        names: Vec<String>,
    },

    /// Archetype is missing or not one of the known values.
    #[error(
        "{player}: invalid or missing deck type '{}' (must be 'speedy', 'hardy', or 'angry')",
        .value.as_deref().unwrap_or("")
    )]
    InvalidArchetype {
        /// Offending player.
        player: PlayerId,
        /// The raw value supplied, if any.
        value: Option<String>,
    },

    /// Targeting strategy is missing or not one of the known values.
    #[error(
        "{player}: invalid or missing target strategy '{}' (must be 'target-mana', 'kill-shot', or 'optimize-damage')",
        .value.as_deref().unwrap_or("")
    )]
    InvalidStrategy {
        /// Offending player.
        player: PlayerId,
        /// The raw value supplied, if any.
        value: Option<String>,
    },
}

impl DeckError {
    /// The player whose deck is at fault.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            DeckError::DeckSize { player, .. }
            | DeckError::UnknownCards { player, .. }
            | DeckError::InvalidArchetype { player, .. }
            | DeckError::InvalidStrategy { player, .. } => *player,
        }
    }
}

/// Fatal error raised while constructing a match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The match configuration itself is unplayable.
    #[error("invalid match configuration: {0}")]
    InvalidConfig(String),

    /// One or more decks failed validation. Every problem is listed.
    #[error("deck validation failed: {}", join_errors(.0))]
    InvalidDecks(Vec<DeckError>),
}

impl ConfigError {
    /// Deck problems carried by this error (empty for config errors).
    #[must_use]
    pub fn deck_errors(&self) -> &[DeckError] {
        match self {
            ConfigError::InvalidDecks(errors) => errors,
            ConfigError::InvalidConfig(_) => &[],
        }
    }
}

fn join_errors(errors: &[DeckError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
