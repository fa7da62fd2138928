//! # deck-brawl
//!
//! A deterministic battle simulation engine for a two-player deck
//! autobattler.
//!
//! Each player brings an ordered 20-card deck with an archetype and a
//! targeting strategy. Every turn both sides draw cards onto a five-slot
//! field under a growing mana budget, then every unit attacks once in
//! speed order. A match ends when a player's hp runs out or both sides
//! run out of cards.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Given the same decks and seed, a match replays
//!    identically. Randomness is only used to break exact speed ties.
//!
//! 2. **Recompute, never patch**: Tribal buffs are re-derived from base
//!    stats every time the field changes, so they can never compound.
//!
//! 3. **Events are the record**: Every turn returns the events it
//!    produced, carrying every value a renderer needs verbatim.
//!
//! ## Modules
//!
//! - `core`: Unit IDs, players, RNG, configuration, errors, match state
//! - `cards`: Card definitions, catalog, archetypes, units
//! - `zones`: The field slot array
//! - `buffs`: Tribal synergy
//! - `targeting`: Target selection strategies
//! - `events`: Battle events and sinks
//! - `decks`: Deck lists, validation, presets
//! - `rules`: Turn engine, attack queue, win conditions, snapshots
//!
//! ## Example
//!
//! ```
//! use deck_brawl::{DeckArchetype, DeckSpec, Match, TargetingStrategy};
//!
//! let goblins = DeckSpec::mono(DeckArchetype::Angry, TargetingStrategy::KillShot, "Goblin", 20);
//! let archers = DeckSpec::mono(DeckArchetype::Hardy, TargetingStrategy::OptimizeDamage, "Archer", 20);
//!
//! let mut game = Match::new(goblins, archers, 42).unwrap();
//! let result = game.run_to_completion(200);
//!
//! assert!(result.is_some());
//! ```

pub mod buffs;
pub mod cards;
pub mod core;
pub mod decks;
pub mod events;
pub mod rules;
pub mod targeting;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DeckError, GameRng, GameRngState, MatchConfig, MatchState, PlayerId, PlayerMap,
    PlayerState, UnitId,
};

pub use crate::cards::{CardCatalog, CardDefinition, DeckArchetype, Tribe, Unit};

pub use crate::zones::Field;

pub use crate::buffs::{recompute_buffs, BuffChange};

pub use crate::targeting::{select_target, TargetingStrategy};

pub use crate::events::{BattleEvent, EventLog, EventSink};

pub use crate::decks::{DeckSpec, ValidatedDeck};

pub use crate::rules::{GameResult, Match, MatchSnapshot, TurnPhase};
