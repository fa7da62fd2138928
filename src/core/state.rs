//! Match state: everything that changes while a match runs.
//!
//! ## PlayerState
//!
//! One side of the board:
//! - Deck (front = next draw), field, discard pile
//! - Hp and mana pool
//! - The deck's archetype and targeting strategy
//!
//! ## MatchState
//!
//! Both players plus turn progression, the result, the tie-break RNG and
//! the unit ID counter. There is no process-wide state: two matches never
//! share anything.

use im::Vector;

use super::config::MatchConfig;
use super::entity::UnitId;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{DeckArchetype, Unit};
use crate::decks::ValidatedDeck;
use crate::rules::{GameResult, TurnPhase};
use crate::targeting::TargetingStrategy;
use crate::zones::Field;

/// One player's side of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    /// Display name ("Player 1", "Player 2").
    pub name: String,

    /// Archetype applied to every unit this player draws.
    pub archetype: DeckArchetype,

    /// How this player's units pick targets.
    pub strategy: TargetingStrategy,

    /// Remaining card names. The front is drawn next.
    pub deck: Vector<String>,

    /// Units in play.
    pub field: Field,

    /// Hit points. Never below zero.
    pub hp: i32,

    /// Mana ceiling for the current turn.
    pub max_mana: u32,

    /// Mana left to spend this turn.
    pub current_mana: u32,

    /// Dead units, oldest first. Never mutated after the move.
    pub discard: Vector<Unit>,
}

impl PlayerState {
    /// Set up a player from a validated deck.
    #[must_use]
    pub fn new(player: PlayerId, deck: ValidatedDeck, config: &MatchConfig) -> Self {
        Self {
            name: player.default_name(),
            archetype: deck.archetype,
            strategy: deck.strategy,
            deck: deck.cards.into_iter().collect(),
            field: Field::new(config.field_size),
            hp: config.max_player_hp,
            max_mana: 0,
            current_mana: 0,
            discard: Vector::new(),
        }
    }

    /// Check if the player has at least `cost` mana left.
    #[must_use]
    pub fn can_afford(&self, cost: u32) -> bool {
        self.current_mana >= cost
    }

    /// Pay mana for a card.
    pub fn spend_mana(&mut self, cost: u32) {
        debug_assert!(cost <= self.current_mana, "spending more mana than available");
        self.current_mana = self.current_mana.saturating_sub(cost);
    }

    /// Grow the mana ceiling by one (up to `cap`) and refill.
    ///
    /// Returns how much the ceiling grew.
    pub fn grow_mana(&mut self, cap: u32) -> u32 {
        let gained = u32::from(self.max_mana < cap);
        self.max_mana += gained;
        self.current_mana = self.max_mana;
        gained
    }

    /// Set both mana values outright.
    pub fn set_mana(&mut self, mana: u32) {
        self.max_mana = mana;
        self.current_mana = mana;
    }

    /// Name of the next card to draw.
    #[must_use]
    pub fn next_card(&self) -> Option<&str> {
        self.deck.front().map(String::as_str)
    }

    /// Remove and return the next card.
    pub fn take_next_card(&mut self) -> Option<String> {
        self.deck.pop_front()
    }

    /// Number of occupied field slots.
    #[must_use]
    pub fn cards_on_field(&self) -> usize {
        self.field.len()
    }

    /// Cards still in play or in the deck.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.field.len()
    }

    /// Check if the player has nothing left to draw or fight with.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.total_cards() == 0
    }

    /// Check if the player's hp has run out.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Deal damage to the player, flooring hp at zero.
    ///
    /// Returns the remaining hp.
    pub fn take_damage(&mut self, damage: i32) -> i32 {
        self.hp = (self.hp - damage).max(0);
        self.hp
    }

    /// Move dead units to the discard pile.
    pub fn bury(&mut self, units: impl IntoIterator<Item = Unit>) {
        for unit in units {
            debug_assert!(!unit.is_alive(), "burying a living unit");
            self.discard.push_back(unit);
        }
    }
}

/// Complete state of one match.
#[derive(Clone, Debug)]
pub struct MatchState {
    /// Both sides of the board.
    pub players: PlayerMap<PlayerState>,

    /// Turn number. Zero before the first turn.
    pub turn_number: u32,

    /// Current phase.
    pub phase: TurnPhase,

    /// Set once the match is decided. Never changes afterwards.
    pub result: Option<GameResult>,

    /// Tie-break RNG for attack ordering.
    pub rng: GameRng,

    /// Next unit ID to hand out.
    next_unit_id: UnitId,
}

impl MatchState {
    /// Create the starting state from two validated decks.
    #[must_use]
    pub fn new(decks: &PlayerMap<ValidatedDeck>, config: &MatchConfig, seed: u64) -> Self {
        Self {
            players: decks.map(|player, deck| PlayerState::new(player, deck.clone(), config)),
            turn_number: 0,
            phase: TurnPhase::NotStarted,
            result: None,
            rng: GameRng::new(seed),
            next_unit_id: UnitId::FIRST,
        }
    }

    /// Allocate a fresh unit ID.
    pub fn alloc_unit_id(&mut self) -> UnitId {
        let id = self.next_unit_id;
        self.next_unit_id = id.next();
        id
    }

    /// The ID the next drawn unit will get.
    #[must_use]
    pub fn peek_unit_id(&self) -> UnitId {
        self.next_unit_id
    }

    /// Check if the match is decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(cards: &[&str]) -> ValidatedDeck {
        ValidatedDeck {
            archetype: DeckArchetype::Speedy,
            strategy: TargetingStrategy::TargetMana,
            cards: cards.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_player_state_new() {
        let player = PlayerState::new(PlayerId::P2, deck(&["Goblin", "Wall"]), &MatchConfig::default());

        assert_eq!(player.name, "Player 2");
        assert_eq!(player.hp, 100);
        assert_eq!(player.next_card(), Some("Goblin"));
        assert_eq!(player.field.capacity(), 5);
        assert_eq!(player.total_cards(), 2);
        assert!(!player.is_exhausted());
    }

    #[test]
    fn test_grow_mana_caps() {
        let mut player = PlayerState::new(PlayerId::P1, deck(&[]), &MatchConfig::default());
        player.set_mana(9);
        player.spend_mana(4);

        assert_eq!(player.grow_mana(10), 1);
        assert_eq!((player.max_mana, player.current_mana), (10, 10));

        player.spend_mana(10);
        assert_eq!(player.grow_mana(10), 0);
        assert_eq!(player.current_mana, 10);
    }

    #[test]
    fn test_take_next_card_in_order() {
        let mut player = PlayerState::new(PlayerId::P1, deck(&["Archer", "Knight"]), &MatchConfig::default());

        assert_eq!(player.take_next_card().as_deref(), Some("Archer"));
        assert_eq!(player.take_next_card().as_deref(), Some("Knight"));
        assert_eq!(player.take_next_card(), None);
        assert!(player.is_exhausted());
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut player = PlayerState::new(PlayerId::P1, deck(&[]), &MatchConfig::default());

        assert_eq!(player.take_damage(60), 40);
        assert_eq!(player.take_damage(60), 0);
        assert!(player.is_defeated());
    }

    #[test]
    fn test_unit_ids_are_sequential() {
        let decks = PlayerMap::new(|_| deck(&["Goblin"]));
        let mut state = MatchState::new(&decks, &MatchConfig::default(), 42);

        assert_eq!(state.alloc_unit_id(), UnitId(1));
        assert_eq!(state.alloc_unit_id(), UnitId(2));
        assert_eq!(state.peek_unit_id(), UnitId(3));
        assert_eq!(state.phase, TurnPhase::NotStarted);
        assert!(!state.is_over());
    }
}
