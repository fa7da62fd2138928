//! Core engine types: unit IDs, players, RNG, configuration, errors, state.
//!
//! Everything else in the crate builds on these. Tunable constants live
//! on `MatchConfig` and per-match mutable data on `MatchState`, so there
//! are no globals.

pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::MatchConfig;
pub use entity::UnitId;
pub use error::{ConfigError, DeckError};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::{MatchState, PlayerState};
