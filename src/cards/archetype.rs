//! Deck archetypes: passive modifiers applied once when a unit is created.
//!
//! | Archetype | Effect                                   |
//! |-----------|------------------------------------------|
//! | `speedy`  | +6 speed (immobile units excluded)       |
//! | `hardy`   | max hp x1.21, rounded                    |
//! | `angry`   | attack x1.204, rounded                   |

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::definition::CardDefinition;

const SPEEDY_BONUS: i32 = 6;
const HARDY_HP_FACTOR: f64 = 1.21;
const ANGRY_ATTACK_FACTOR: f64 = 1.204;

/// Round to the nearest integer, halves rounding up.
#[must_use]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Per-deck passive modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeckArchetype {
    /// Faster units.
    Speedy,
    /// Tougher units.
    Hardy,
    /// Harder-hitting units.
    Angry,
}

/// Archetype-adjusted base stats, before any tribal buff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseStats {
    /// Max hp after the archetype modifier.
    pub max_hp: i32,
    /// Attack after the archetype modifier.
    pub attack: i32,
    /// Speed after the archetype modifier.
    pub speed: i32,
}

impl DeckArchetype {
    /// Every archetype, in canonical order.
    pub const ALL: [DeckArchetype; 3] = [
        DeckArchetype::Speedy,
        DeckArchetype::Hardy,
        DeckArchetype::Angry,
    ];

    /// The kebab-case name used in deck lists.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DeckArchetype::Speedy => "speedy",
            DeckArchetype::Hardy => "hardy",
            DeckArchetype::Angry => "angry",
        }
    }

    /// Apply this archetype to a card's base stats.
    ///
    /// ```
    /// use deck_brawl::cards::{CardCatalog, DeckArchetype};
    ///
    /// let catalog = CardCatalog::standard();
    /// let skeleton = catalog.get("Skeleton").unwrap();
    ///
    /// assert_eq!(DeckArchetype::Hardy.apply(skeleton).max_hp, 91);
    /// ```
    #[must_use]
    pub fn apply(self, card: &CardDefinition) -> BaseStats {
        let mut stats = BaseStats {
            max_hp: card.hp,
            attack: card.attack,
            speed: card.speed,
        };
        match self {
            DeckArchetype::Speedy => {
                if !card.is_immobile() {
                    stats.speed += SPEEDY_BONUS;
                }
            }
            DeckArchetype::Hardy => {
                stats.max_hp = round_half_up(f64::from(card.hp) * HARDY_HP_FACTOR);
            }
            DeckArchetype::Angry => {
                stats.attack = round_half_up(f64::from(card.attack) * ANGRY_ATTACK_FACTOR);
            }
        }
        stats
    }
}

impl std::fmt::Display for DeckArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised archetype name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown deck archetype '{0}'")]
pub struct UnknownArchetype(pub String);

impl FromStr for DeckArchetype {
    type Err = UnknownArchetype;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownArchetype(s.to_string()))
    }
}
