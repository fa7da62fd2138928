//! Zones: where units live during play.
//!
//! A player's deck is an ordered list of card names held on the player
//! state; once drawn, a card becomes a `Unit` on the player's `Field`,
//! and on death moves to the discard pile.

pub mod field;

pub use field::{Field, Slots};
