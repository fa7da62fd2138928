//! Attack queue construction.
//!
//! Every unit on both fields acts once per attack phase, fastest first.
//! Player 1's units are enqueued before player 2's, each in slot order,
//! and then sorted by speed.
//!
//! Exact speed ties are broken by a coin flip drawn from the match RNG
//! for each comparison, not once per unit. With three or more units at
//! the same speed the resulting order need not be consistent with any
//! single ranking, but it is fully reproducible for a given seed.
//!
//! The sort is a plain insertion sort: the comparator is not a total
//! order, which `slice::sort_by` does not accept, and queues never hold
//! more than two fields' worth of units.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, PlayerId, PlayerMap, PlayerState, UnitId};

/// One scheduled attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// The attacking unit.
    pub unit: UnitId,
    /// Its owner.
    pub owner: PlayerId,
    /// Speed at queue-build time.
    pub speed: i32,
}

/// Build the speed-ordered attack queue for this phase.
pub fn build_attack_queue(players: &PlayerMap<PlayerState>, rng: &mut GameRng) -> Vec<QueueEntry> {
    let mut queue: Vec<QueueEntry> = players
        .iter()
        .flat_map(|(owner, player)| {
            player.field.living().map(move |unit| QueueEntry {
                unit: unit.id,
                owner,
                speed: unit.speed,
            })
        })
        .collect();

    sort_by_speed(&mut queue, rng);
    queue
}

/// Sort entries fastest first, breaking ties with the RNG.
pub fn sort_by_speed(entries: &mut [QueueEntry], rng: &mut GameRng) {
    for i in 1..entries.len() {
        let mut j = i;
        while j > 0 && compare(&entries[j - 1], &entries[j], rng) == Ordering::Greater {
            entries.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// `Greater` means `a` must come after `b`.
fn compare(a: &QueueEntry, b: &QueueEntry, rng: &mut GameRng) -> Ordering {
    if a.speed != b.speed {
        return b.speed.cmp(&a.speed);
    }
    rng.coin_flip().partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}
