//! Read-only match snapshots for presentation layers.
//!
//! Decks and discard piles are `im::Vector`s, so taking a snapshot is
//! cheap even mid-match.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::phase::TurnPhase;
use super::result::GameResult;
use crate::cards::{DeckArchetype, Unit};
use crate::core::{MatchState, PlayerMap, PlayerState};
use crate::targeting::TargetingStrategy;

/// One player's state at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Display name.
    pub name: String,
    /// Deck archetype.
    pub archetype: DeckArchetype,
    /// Targeting strategy.
    pub strategy: TargetingStrategy,
    /// Player hit points.
    pub hp: i32,
    /// Mana ceiling this turn.
    pub max_mana: u32,
    /// Unspent mana.
    pub current_mana: u32,
    /// Remaining card names, next draw first.
    pub deck: Vector<String>,
    /// Slot array, empty slots included.
    pub field: Vec<Option<Unit>>,
    /// Dead units, oldest first.
    pub discard: Vector<Unit>,
}

impl PlayerSnapshot {
    /// Capture one player.
    #[must_use]
    pub fn of(player: &PlayerState) -> Self {
        Self {
            name: player.name.clone(),
            archetype: player.archetype,
            strategy: player.strategy,
            hp: player.hp,
            max_mana: player.max_mana,
            current_mana: player.current_mana,
            deck: player.deck.clone(),
            field: player.field.slots().to_vec(),
            discard: player.discard.clone(),
        }
    }
}

/// The whole match at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Turn number, zero before the first turn.
    pub turn_number: u32,
    /// Phase at capture time.
    pub phase: TurnPhase,
    /// The result, once decided.
    pub result: Option<GameResult>,
    /// Both players.
    pub players: PlayerMap<PlayerSnapshot>,
}

impl MatchSnapshot {
    /// Capture a match.
    #[must_use]
    pub fn of(state: &MatchState) -> Self {
        Self {
            turn_number: state.turn_number,
            phase: state.phase,
            result: state.result,
            players: state.players.map(|_, p| PlayerSnapshot::of(p)),
        }
    }
}
