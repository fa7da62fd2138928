//! Pre-match deck validation.
//!
//! Both decks are checked in one pass and every problem is collected,
//! grouped by kind: sizes first, then unknown cards, then archetypes,
//! then strategies. Player 1 comes before player 2 within each group.

use rustc_hash::FxHashSet;

use super::deck::{DeckSpec, ValidatedDeck};
use crate::cards::{CardCatalog, DeckArchetype};
use crate::core::{ConfigError, DeckError, MatchConfig, PlayerId, PlayerMap};
use crate::targeting::TargetingStrategy;

/// One validation rule applied to one player's deck.
type Check = fn(PlayerId, &DeckSpec, &CardCatalog, &MatchConfig) -> Option<DeckError>;

const CHECKS: [Check; 4] = [check_size, check_cards, check_archetype, check_strategy];

/// Validate both decks against the catalog and config.
///
/// Returns the typed decks, or `ConfigError::InvalidDecks` listing
/// every problem found.
pub fn validate_decks(
    decks: &PlayerMap<DeckSpec>,
    catalog: &CardCatalog,
    config: &MatchConfig,
) -> Result<PlayerMap<ValidatedDeck>, ConfigError> {
    let errors: Vec<DeckError> = CHECKS
        .iter()
        .flat_map(move |check| {
            decks
                .iter()
                .filter_map(move |(player, deck)| check(player, deck, catalog, config))
        })
        .collect();

    let validated = PlayerMap::try_new(|player| typed(&decks[player]).ok_or(()));
    match validated {
        Ok(decks) if errors.is_empty() => Ok(decks),
        _ => Err(ConfigError::InvalidDecks(errors)),
    }
}

/// Validate a single deck on its own.
pub fn validate_deck(
    player: PlayerId,
    deck: &DeckSpec,
    catalog: &CardCatalog,
    config: &MatchConfig,
) -> Result<ValidatedDeck, Vec<DeckError>> {
    let errors: Vec<DeckError> = CHECKS
        .iter()
        .filter_map(|check| check(player, deck, catalog, config))
        .collect();

    match typed(deck) {
        Some(valid) if errors.is_empty() => Ok(valid),
        _ => Err(errors),
    }
}

fn typed(deck: &DeckSpec) -> Option<ValidatedDeck> {
    Some(ValidatedDeck {
        archetype: parse_archetype(deck)?,
        strategy: parse_strategy(deck)?,
        cards: deck.cards.clone(),
    })
}

fn check_size(player: PlayerId, deck: &DeckSpec, _: &CardCatalog, config: &MatchConfig) -> Option<DeckError> {
    (deck.cards.len() != config.deck_size).then(|| DeckError::DeckSize {
        player,
        expected: config.deck_size,
        actual: deck.cards.len(),
    })
}

fn check_cards(player: PlayerId, deck: &DeckSpec, catalog: &CardCatalog, _: &MatchConfig) -> Option<DeckError> {
    let names = unknown_cards(&deck.cards, catalog);
    (!names.is_empty()).then(|| DeckError::UnknownCards { player, names })
}

fn check_archetype(player: PlayerId, deck: &DeckSpec, _: &CardCatalog, _: &MatchConfig) -> Option<DeckError> {
    parse_archetype(deck).is_none().then(|| DeckError::InvalidArchetype {
        player,
        value: deck.archetype.clone(),
    })
}

fn check_strategy(player: PlayerId, deck: &DeckSpec, _: &CardCatalog, _: &MatchConfig) -> Option<DeckError> {
    parse_strategy(deck).is_none().then(|| DeckError::InvalidStrategy {
        player,
        value: deck.targeting_strategy.clone(),
    })
}

/// Names not in the catalog, deduplicated, in first-seen order.
fn unknown_cards(cards: &[String], catalog: &CardCatalog) -> Vec<String> {
    let mut seen = FxHashSet::default();
    cards
        .iter()
        .filter(|name| !catalog.contains(name))
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

fn parse_archetype(deck: &DeckSpec) -> Option<DeckArchetype> {
    deck.archetype.as_deref()?.parse().ok()
}

fn parse_strategy(deck: &DeckSpec) -> Option<TargetingStrategy> {
    deck.targeting_strategy.as_deref()?.parse().ok()
}
