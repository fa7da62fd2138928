//! Deck lists as supplied by the player, and their validated form.

use serde::{Deserialize, Serialize};

use crate::cards::DeckArchetype;
use crate::targeting::TargetingStrategy;

/// A deck as submitted for a match, before validation.
///
/// Archetype and strategy are raw strings so that a deck loaded from
/// JSON with a bad or missing value can still be reported precisely.
///
/// ```
/// use deck_brawl::decks::DeckSpec;
///
/// let json = r#"{ "type": "angry", "targetStrategy": "kill-shot", "cards": ["Goblin"] }"#;
/// let deck: DeckSpec = serde_json::from_str(json).unwrap();
///
/// assert_eq!(deck.archetype.as_deref(), Some("angry"));
/// assert_eq!(deck.cards.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSpec {
    /// Deck archetype name (`speedy`, `hardy`, `angry`).
    #[serde(rename = "type", default)]
    pub archetype: Option<String>,

    /// Targeting strategy name (`target-mana`, `kill-shot`, `optimize-damage`).
    #[serde(rename = "targetStrategy", default)]
    pub targeting_strategy: Option<String>,

    /// Card names, front of the list is drawn first.
    #[serde(default)]
    pub cards: Vec<String>,
}

impl DeckSpec {
    /// Build a deck from typed archetype and strategy values.
    pub fn new<S: Into<String>>(
        archetype: DeckArchetype,
        strategy: TargetingStrategy,
        cards: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            archetype: Some(archetype.as_str().to_string()),
            targeting_strategy: Some(strategy.as_str().to_string()),
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }

    /// A deck of `count` copies of one card.
    #[must_use]
    pub fn mono(
        archetype: DeckArchetype,
        strategy: TargetingStrategy,
        card: &str,
        count: usize,
    ) -> Self {
        Self::new(archetype, strategy, std::iter::repeat(card).take(count))
    }

    /// Replace the archetype with a raw value.
    #[must_use]
    pub fn with_archetype(mut self, archetype: Option<&str>) -> Self {
        self.archetype = archetype.map(str::to_string);
        self
    }

    /// Replace the strategy with a raw value.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Option<&str>) -> Self {
        self.targeting_strategy = strategy.map(str::to_string);
        self
    }
}

/// A deck that passed validation. Every card name is in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedDeck {
    /// Parsed archetype.
    pub archetype: DeckArchetype,
    /// Parsed targeting strategy.
    pub strategy: TargetingStrategy,
    /// Card names in draw order.
    pub cards: Vec<String>,
}
