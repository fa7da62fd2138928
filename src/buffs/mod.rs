//! Buff engine: tribal synergy recomputation.
//!
//! `recompute_buffs` re-derives every tribal unit's stats from its base
//! stats and the current living tribe counts. It never patches stats
//! incrementally, so repeated calls cannot compound.
//!
//! The pass is two-phase: all derived stats are computed against the same
//! snapshot of the field first, then written back. No unit ever sees a
//! partially updated neighbour.

pub mod tribal;

pub use tribal::{
    derive_stats, effective_extra, goblin_multiplier, multiplier, skeleton_multiplier,
    DerivedStats, TribeCounts,
};

use serde::{Deserialize, Serialize};

use crate::cards::Tribe;
use crate::core::entity::UnitId;
use crate::zones::Field;

/// One unit whose buffed stats changed during a recomputation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffChange {
    /// The unit that changed.
    pub unit: UnitId,
    /// Its tribe.
    pub tribe: Tribe,
    /// Living copies of the tribe on the field.
    pub count: usize,
    /// Stats before the pass.
    pub before: DerivedStats,
    /// Stats after the pass.
    pub after: DerivedStats,
}

/// Recompute tribal buffs for one field.
///
/// Returns the units whose stats changed, in slot order. Running it twice
/// with no field change in between returns an empty list the second time.
pub fn recompute_buffs(field: &mut Field) -> Vec<BuffChange> {
    let counts = TribeCounts::from_units(field.units());

    let updates: Vec<(UnitId, Tribe, DerivedStats, DerivedStats)> = field
        .living()
        .filter_map(|unit| {
            let tribe = unit.tribe()?;
            Some((unit.id, tribe, DerivedStats::of(unit), derive_stats(unit, &counts)))
        })
        .collect();

    let mut changes = Vec::new();
    for (id, tribe, before, after) in updates {
        let Some(unit) = field.get_mut(id) else {
            continue;
        };
        unit.effective_attack = after.effective_attack;
        unit.max_hp = after.max_hp;
        unit.current_hp = after.current_hp;
        debug_assert!(unit.current_hp <= unit.max_hp, "hp above max after buff pass");

        if before != after {
            changes.push(BuffChange {
                unit: id,
                tribe,
                count: counts.of(tribe),
                before,
                after,
            });
        }
    }
    changes
}

/// Reset every unit's effective attack to its base, then recompute buffs.
///
/// Used at the start of each attack phase. Changes are measured against
/// the stats from before the reset, so a unit whose buffed stats come out
/// the same is not reported.
pub fn reset_and_recompute(field: &mut Field) -> Vec<BuffChange> {
    let prior: Vec<(UnitId, DerivedStats)> = field
        .living()
        .map(|unit| (unit.id, DerivedStats::of(unit)))
        .collect();

    for unit in field.units_mut() {
        unit.reset_attack();
    }
    recompute_buffs(field);

    let counts = TribeCounts::from_units(field.units());
    prior
        .into_iter()
        .filter_map(|(id, before)| {
            let unit = field.get(id)?;
            let tribe = unit.tribe()?;
            let after = DerivedStats::of(unit);
            (before != after).then(|| BuffChange {
                unit: id,
                tribe,
                count: counts.of(tribe),
                before,
                after,
            })
        })
        .collect()
}
