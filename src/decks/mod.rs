//! Deck lists: submission format, validation, and reference presets.
//!
//! A match is built from two [`DeckSpec`]s. [`validate_decks`] checks them
//! against the card catalog and the match config before any turn runs,
//! reporting every problem at once.

pub mod deck;
pub mod presets;
pub mod validate;

pub use deck::{DeckSpec, ValidatedDeck};
pub use validate::{validate_deck, validate_decks};
