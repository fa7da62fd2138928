//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable base stats of a card type.
//! For example, a Goblin always starts with 30 hp, 15 attack, 35 speed,
//! and costs 1 mana. Per-unit combat state lives on `Unit`.

use serde::{Deserialize, Serialize};

/// Tribal family of a card. Only tribal units take part in synergy buffs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tribe {
    /// Goblins boost each other's attack.
    Goblin,
    /// Skeletons boost each other's max hp.
    Skeleton,
}

impl Tribe {
    /// Both tribes, in buff-application order.
    pub const ALL: [Tribe; 2] = [Tribe::Goblin, Tribe::Skeleton];

    /// The card name that belongs to this tribe.
    #[must_use]
    pub const fn card_name(self) -> &'static str {
        match self {
            Tribe::Goblin => "Goblin",
            Tribe::Skeleton => "Skeleton",
        }
    }

    /// Classify a card name.
    #[must_use]
    pub fn of(name: &str) -> Option<Tribe> {
        Self::ALL.into_iter().find(|t| t.card_name() == name)
    }
}

impl std::fmt::Display for Tribe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.card_name())
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use deck_brawl::cards::CardDefinition;
///
/// let archer = CardDefinition::new("Archer", 90, 44, 30, 4);
///
/// assert_eq!(archer.attack, 44);
/// assert!(archer.tribe().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card name, also the catalog key.
    pub name: String,

    /// Base hit points.
    pub hp: i32,

    /// Base attack.
    pub attack: i32,

    /// Base speed. Higher acts first.
    pub speed: i32,

    /// Mana cost to draw onto the field.
    pub cost: u32,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(name: impl Into<String>, hp: i32, attack: i32, speed: i32, cost: u32) -> Self {
        Self {
            name: name.into(),
            hp,
            attack,
            speed,
            cost,
        }
    }

    /// Tribal family, if any.
    #[must_use]
    pub fn tribe(&self) -> Option<Tribe> {
        Tribe::of(&self.name)
    }

    /// Units that never move (zero base speed) ignore speed bonuses.
    #[must_use]
    pub fn is_immobile(&self) -> bool {
        self.speed == 0
    }
}
