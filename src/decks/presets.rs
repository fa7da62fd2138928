//! Reference deck lists.
//!
//! Two balanced mixed decks, both `hardy` with `kill-shot` targeting.
//! Player 2 trades a Wall and an Archer for a third Skeleton and Knight.

use super::deck::DeckSpec;
use crate::cards::DeckArchetype;
use crate::targeting::TargetingStrategy;

const PLAYER1_CARDS: [&str; 20] = [
    "Goblin", "Goblin", "Goblin", "Skeleton", "Skeleton", "Archer", "Goblin", "Wall", "Wall", "Archer",
    "Archer", "Knight", "Wizard", "Knight", "Wall", "Wizard", "Wall", "Archer", "Wall", "Archer",
];

const PLAYER2_CARDS: [&str; 20] = [
    "Goblin", "Goblin", "Goblin", "Skeleton", "Skeleton", "Archer", "Goblin", "Archer", "Skeleton",
    "Knight", "Wall", "Knight", "Wizard", "Knight", "Wall", "Wizard", "Wall", "Archer", "Wall", "Archer",
];

/// The reference deck for player 1.
#[must_use]
pub fn player1_deck() -> DeckSpec {
    DeckSpec::new(DeckArchetype::Hardy, TargetingStrategy::KillShot, PLAYER1_CARDS)
}

/// The reference deck for player 2.
#[must_use]
pub fn player2_deck() -> DeckSpec {
    DeckSpec::new(DeckArchetype::Hardy, TargetingStrategy::KillShot, PLAYER2_CARDS)
}
