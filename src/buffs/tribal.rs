//! Tribal synergy math.
//!
//! Same-tribe units on one field boost each other. The bonus scales with
//! the number of *extra* copies beyond the first, on a soft curve: the
//! first two extras count fully, every extra after that counts half.
//!
//! | living copies | effective extra | Goblin attack | Skeleton hp |
//! |---------------|-----------------|---------------|-------------|
//! | 1             | 0.0             | x1.00         | x1.00       |
//! | 2             | 1.0             | x1.08         | x1.20       |
//! | 3             | 2.0             | x1.16         | x1.40       |
//! | 4             | 2.5             | x1.20         | x1.50       |
//! | 5             | 3.0             | x1.24         | x1.60       |

use serde::{Deserialize, Serialize};

use crate::cards::{round_half_up, Tribe, Unit};

/// Extras that count at full value.
const FULL_VALUE_EXTRAS: f64 = 2.0;
/// Weight of each extra beyond the full-value ones.
const TAIL_WEIGHT: f64 = 0.5;
/// Goblin attack gain per effective extra.
const GOBLIN_ATTACK_STEP: f64 = 0.08;
/// Skeleton max-hp gain per effective extra.
const SKELETON_HP_STEP: f64 = 0.20;

/// Diminishing-returns count of extra copies.
///
/// ```
/// use deck_brawl::buffs::effective_extra;
///
/// assert_eq!(effective_extra(1), 0.0);
/// assert_eq!(effective_extra(4), 2.5);
/// assert_eq!(effective_extra(5), 3.0);
/// ```
#[must_use]
pub fn effective_extra(count: usize) -> f64 {
    let extra = count.saturating_sub(1) as f64;
    let base = extra.min(FULL_VALUE_EXTRAS);
    let tail = (extra - FULL_VALUE_EXTRAS).max(0.0) * TAIL_WEIGHT;
    base + tail
}

/// Per-extra step size of a tribe's multiplier.
#[must_use]
pub const fn step(tribe: Tribe) -> f64 {
    match tribe {
        Tribe::Goblin => GOBLIN_ATTACK_STEP,
        Tribe::Skeleton => SKELETON_HP_STEP,
    }
}

/// Stat multiplier for `count` living copies of a tribe.
#[must_use]
pub fn multiplier(tribe: Tribe, count: usize) -> f64 {
    1.0 + step(tribe) * effective_extra(count)
}

/// Goblin attack multiplier for `count` living Goblins.
#[must_use]
pub fn goblin_multiplier(count: usize) -> f64 {
    multiplier(Tribe::Goblin, count)
}

/// Skeleton max-hp multiplier for `count` living Skeletons.
#[must_use]
pub fn skeleton_multiplier(count: usize) -> f64 {
    multiplier(Tribe::Skeleton, count)
}

/// Living copies of each tribe on one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TribeCounts {
    /// Living Goblins.
    pub goblins: usize,
    /// Living Skeletons.
    pub skeletons: usize,
}

impl TribeCounts {
    /// Count living tribal units.
    pub fn from_units<'a>(units: impl IntoIterator<Item = &'a Unit>) -> Self {
        let mut counts = Self::default();
        for unit in units.into_iter().filter(|u| u.is_alive()) {
            match unit.tribe() {
                Some(Tribe::Goblin) => counts.goblins += 1,
                Some(Tribe::Skeleton) => counts.skeletons += 1,
                None => {}
            }
        }
        counts
    }

    /// Count for one tribe.
    #[must_use]
    pub fn of(&self, tribe: Tribe) -> usize {
        match tribe {
            Tribe::Goblin => self.goblins,
            Tribe::Skeleton => self.skeletons,
        }
    }
}

/// Buff-dependent stats of a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    /// Attack for the current phase.
    pub effective_attack: i32,
    /// Max hp including tribal bonus.
    pub max_hp: i32,
    /// Current hp, rescaled to keep the hp ratio.
    pub current_hp: i32,
}

impl DerivedStats {
    /// Stats as currently stored on a unit.
    #[must_use]
    pub fn of(unit: &Unit) -> Self {
        Self {
            effective_attack: unit.effective_attack,
            max_hp: unit.max_hp,
            current_hp: unit.current_hp,
        }
    }
}

/// Derive a unit's stats from its base stats and the field context.
///
/// Pure: the result depends only on the unit's archetype-adjusted base
/// stats, its current hp ratio, and the tribe counts. Applying it twice
/// with the same counts is a no-op.
#[must_use]
pub fn derive_stats(unit: &Unit, counts: &TribeCounts) -> DerivedStats {
    let mut stats = DerivedStats::of(unit);
    match unit.tribe() {
        Some(Tribe::Goblin) if unit.is_alive() => {
            let mult = goblin_multiplier(counts.goblins);
            stats.effective_attack = round_half_up(f64::from(unit.base_attack) * mult);
        }
        Some(Tribe::Skeleton) if unit.is_alive() => {
            let mult = skeleton_multiplier(counts.skeletons);
            let max_hp = round_half_up(f64::from(unit.base_max_hp) * mult);
            let ratio = f64::from(unit.current_hp) / f64::from(unit.max_hp);
            stats.max_hp = max_hp;
            stats.current_hp = round_half_up(f64::from(max_hp) * ratio);
        }
        _ => {}
    }
    stats
}
