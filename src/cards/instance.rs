//! Units - runtime card state.
//!
//! A `Unit` is a card that has been drawn onto a field. It carries the
//! archetype-adjusted base stats fixed at creation plus the mutable combat
//! state (current hp, effective attack, attack flag) that buffs and damage
//! change during play.
//!
//! Once a unit dies it moves to its owner's discard pile and is never
//! mutated again.

use serde::{Deserialize, Serialize};

use super::archetype::DeckArchetype;
use super::definition::{CardDefinition, Tribe};
use crate::core::entity::UnitId;
use crate::core::player::PlayerId;

/// A card instance on a field.
///
/// Invariants while on a field: `current_hp <= max_hp`, and the unit is
/// alive (`current_hp > 0`) once cleanup has run.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    /// Unique unit ID, assigned at draw time.
    pub id: UnitId,

    /// Player whose field holds this unit.
    pub owner: PlayerId,

    /// Catalog name of the card.
    pub card_name: String,

    /// Archetype applied at creation.
    pub archetype: DeckArchetype,

    /// Max hp after the archetype modifier, before tribal buffs.
    pub base_max_hp: i32,

    /// Current max hp, including tribal buffs.
    pub max_hp: i32,

    /// Current hp. Zero or below means dead.
    pub current_hp: i32,

    /// Attack after the archetype modifier, before tribal buffs.
    pub base_attack: i32,

    /// Attack used this attack phase, including tribal buffs.
    pub effective_attack: i32,

    /// Speed after the archetype modifier.
    pub speed: i32,

    /// Mana cost of the card.
    pub mana_cost: u32,

    /// Whether the unit has attacked during the current turn.
    pub has_attacked: bool,
}

impl Unit {
    /// Instantiate a card for a player, applying the deck archetype.
    #[must_use]
    pub fn spawn(id: UnitId, owner: PlayerId, card: &CardDefinition, archetype: DeckArchetype) -> Self {
        let stats = archetype.apply(card);
        Self {
            id,
            owner,
            card_name: card.name.clone(),
            archetype,
            base_max_hp: stats.max_hp,
            max_hp: stats.max_hp,
            current_hp: stats.max_hp,
            base_attack: stats.attack,
            effective_attack: stats.attack,
            speed: stats.speed,
            mana_cost: card.cost,
            has_attacked: false,
        }
    }

    /// Tribal family of this unit, if any.
    #[must_use]
    pub fn tribe(&self) -> Option<Tribe> {
        Tribe::of(&self.card_name)
    }

    /// Check if the unit is still alive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Apply damage. Returns `true` if the unit died.
    pub fn take_damage(&mut self, damage: i32) -> bool {
        self.current_hp -= damage;
        !self.is_alive()
    }

    /// Drop tribal attack bonuses ahead of a fresh buff pass.
    pub fn reset_attack(&mut self) {
        self.effective_attack = self.base_attack;
    }

    /// Clear the per-turn attack flag.
    pub fn reset_attack_state(&mut self) {
        self.has_attacked = false;
    }
}
