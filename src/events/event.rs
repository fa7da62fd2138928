//! Battle event types.
//!
//! Events are the authoritative record of a match. Every number a
//! consumer might display (damage dealt, resulting hp, mana left) is
//! copied from engine state at the moment the event fires, so a renderer
//! never has to recompute anything.

use serde::{Deserialize, Serialize};

use crate::buffs::BuffChange;
use crate::cards::Tribe;
use crate::core::{PlayerId, UnitId};
use crate::rules::{GameResult, TurnPhase};
use crate::targeting::TargetingStrategy;

/// Something that happened during a match, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BattleEvent {
    /// A new turn began.
    TurnStarted {
        /// Turn number, starting at 1.
        turn: u32,
    },

    /// A player's mana pool grew and was refilled.
    ManaRefreshed {
        player: PlayerId,
        max_mana: u32,
        current_mana: u32,
        /// How much `max_mana` grew this turn (zero at the cap).
        gained: u32,
    },

    /// A phase of the turn began.
    PhaseStarted { phase: TurnPhase },

    /// A card left the deck and became a unit on the field.
    CardDrawn {
        player: PlayerId,
        unit: UnitId,
        card: String,
        cost: u32,
        /// Mana remaining after paying for the card.
        mana_left: u32,
        /// Field slot the unit landed in.
        slot: usize,
        /// Whether the draw came from equalization.
        equalization: bool,
    },

    /// Drawing stopped because the front card costs too much.
    DrawBlocked {
        player: PlayerId,
        card: String,
        cost: u32,
        mana: u32,
    },

    /// A tribal unit's stats changed after a buff pass.
    BuffChanged {
        player: PlayerId,
        unit: UnitId,
        tribe: Tribe,
        /// Living copies of the tribe on the field.
        count: usize,
        attack: i32,
        max_hp: i32,
        current_hp: i32,
    },

    /// A player with fewer units gets catch-up draws.
    Equalization {
        player: PlayerId,
        own_count: usize,
        opponent_count: usize,
        /// Upper bound on the catch-up draws.
        max_draws: usize,
    },

    /// The attack order for this phase.
    AttackQueueBuilt { order: Vec<UnitId> },

    /// A unit is about to attack.
    AttackDeclared { player: PlayerId, unit: UnitId },

    /// An attacker chose an enemy unit.
    TargetSelected {
        player: PlayerId,
        attacker: UnitId,
        target: UnitId,
        strategy: TargetingStrategy,
    },

    /// A unit took damage.
    DamageApplied {
        attacker: UnitId,
        target: UnitId,
        damage: i32,
        /// Target hp after the hit. Zero or below means it died.
        remaining_hp: i32,
        max_hp: i32,
    },

    /// A unit died and went to the discard pile.
    UnitDied {
        player: PlayerId,
        unit: UnitId,
        card: String,
    },

    /// Survivors slid left after a removal.
    FieldCompacted {
        player: PlayerId,
        /// Unit per slot after compaction.
        order: Vec<Option<UnitId>>,
    },

    /// An attacker with no target hit the defending player.
    DirectDamage {
        attacker: UnitId,
        defender: PlayerId,
        damage: i32,
        remaining_hp: i32,
    },

    /// A player's hp reached zero.
    PlayerDefeated { player: PlayerId },

    /// A player has no cards left in deck or on field.
    CardsExhausted { player: PlayerId },

    /// The turn finished.
    TurnEnded { turn: u32 },

    /// The match is decided.
    GameOver { result: GameResult },
}

impl BattleEvent {
    /// Build a `BuffChanged` event from a buff pass result.
    #[must_use]
    pub fn buff_changed(player: PlayerId, change: &BuffChange) -> Self {
        BattleEvent::BuffChanged {
            player,
            unit: change.unit,
            tribe: change.tribe,
            count: change.count,
            attack: change.after.effective_attack,
            max_hp: change.after.max_hp,
            current_hp: change.after.current_hp,
        }
    }

    /// Short variant name, matching the serialized `type` tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            BattleEvent::TurnStarted { .. } => "turnStarted",
            BattleEvent::ManaRefreshed { .. } => "manaRefreshed",
            BattleEvent::PhaseStarted { .. } => "phaseStarted",
            BattleEvent::CardDrawn { .. } => "cardDrawn",
            BattleEvent::DrawBlocked { .. } => "drawBlocked",
            BattleEvent::BuffChanged { .. } => "buffChanged",
            BattleEvent::Equalization { .. } => "equalization",
            BattleEvent::AttackQueueBuilt { .. } => "attackQueueBuilt",
            BattleEvent::AttackDeclared { .. } => "attackDeclared",
            BattleEvent::TargetSelected { .. } => "targetSelected",
            BattleEvent::DamageApplied { .. } => "damageApplied",
            BattleEvent::UnitDied { .. } => "unitDied",
            BattleEvent::FieldCompacted { .. } => "fieldCompacted",
            BattleEvent::DirectDamage { .. } => "directDamage",
            BattleEvent::PlayerDefeated { .. } => "playerDefeated",
            BattleEvent::CardsExhausted { .. } => "cardsExhausted",
            BattleEvent::TurnEnded { .. } => "turnEnded",
            BattleEvent::GameOver { .. } => "gameOver",
        }
    }

    /// The player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            BattleEvent::ManaRefreshed { player, .. }
            | BattleEvent::CardDrawn { player, .. }
            | BattleEvent::DrawBlocked { player, .. }
            | BattleEvent::BuffChanged { player, .. }
            | BattleEvent::Equalization { player, .. }
            | BattleEvent::AttackDeclared { player, .. }
            | BattleEvent::TargetSelected { player, .. }
            | BattleEvent::UnitDied { player, .. }
            | BattleEvent::FieldCompacted { player, .. }
            | BattleEvent::PlayerDefeated { player }
            | BattleEvent::CardsExhausted { player } => Some(*player),
            BattleEvent::DirectDamage { defender, .. } => Some(*defender),
            _ => None,
        }
    }
}
