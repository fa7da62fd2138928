//! Card catalog for definition lookup.
//!
//! The `CardCatalog` is the closed set of card types a match can use.
//! It is built once before a match and only read afterwards. Deck
//! validation uses it as the source of truth for card names.

use rustc_hash::FxHashMap;

use super::definition::CardDefinition;

/// Catalog of card definitions keyed by name.
///
/// Iteration follows registration order.
///
/// ## Example
///
/// ```
/// use deck_brawl::cards::CardCatalog;
///
/// let catalog = CardCatalog::standard();
///
/// let knight = catalog.get("Knight").unwrap();
/// assert_eq!(knight.cost, 8);
/// assert!(catalog.get("Dragon").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, CardDefinition>,
    order: Vec<String>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard six-card catalog.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(CardDefinition::new("Goblin", 30, 15, 35, 1));
        catalog.register(CardDefinition::new("Skeleton", 75, 30, 15, 2));
        catalog.register(CardDefinition::new("Archer", 90, 44, 30, 4));
        catalog.register(CardDefinition::new("Wizard", 120, 82, 25, 6));
        catalog.register(CardDefinition::new("Knight", 200, 100, 20, 8));
        catalog.register(CardDefinition::new("Wall", 1500, 0, 0, 6));
        catalog
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same name already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.name) {
            panic!("Card {:?} already registered", card.name);
        }
        self.order.push(card.name.clone());
        self.cards.insert(card.name.clone(), card);
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.get(name)
    }

    /// Check if a card name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    /// Mana cost of a card, if registered.
    #[must_use]
    pub fn cost_of(&self, name: &str) -> Option<u32> {
        self.get(name).map(|c| c.cost)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().filter_map(move |name| self.cards.get(name))
    }

    /// All registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
