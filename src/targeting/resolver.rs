//! Target selection.
//!
//! Every strategy scans the defenders in slot order and keeps a running
//! best. When the primary metric ties, `better_target` decides: higher
//! mana cost first (unless cost is the primary key), then a unit that has
//! not attacked yet over one that has. Remaining ties keep the earlier
//! slot, so the result is fully determined by the defender order.

use crate::cards::Unit;

use super::strategy::TargetingStrategy;

/// Resolve a metric tie between the current best and a candidate.
///
/// Returns the unit to keep.
#[must_use]
pub fn better_target<'a>(current: &'a Unit, candidate: &'a Unit, use_cost_tiebreak: bool) -> &'a Unit {
    if use_cost_tiebreak && candidate.mana_cost != current.mana_cost {
        return if candidate.mana_cost > current.mana_cost {
            candidate
        } else {
            current
        };
    }
    if !candidate.has_attacked && current.has_attacked {
        return candidate;
    }
    current
}

/// Pick the defender an attacker should hit.
///
/// Returns `None` iff there are no living defenders, in which case the
/// attack goes to the defending player.
pub fn select_target<'a>(
    attacker: &Unit,
    strategy: TargetingStrategy,
    defenders: impl IntoIterator<Item = &'a Unit>,
) -> Option<&'a Unit> {
    let living: Vec<&'a Unit> = defenders.into_iter().filter(|u| u.is_alive()).collect();
    if living.is_empty() {
        return None;
    }

    match strategy {
        TargetingStrategy::TargetMana => by_mana(&living),
        TargetingStrategy::KillShot => kill_shot(attacker, &living),
        TargetingStrategy::OptimizeDamage => optimize_damage(attacker, &living),
    }
}

/// Keep the candidate with the highest `key`, ties through `better_target`.
fn best_by_max<'a>(
    targets: impl IntoIterator<Item = &'a Unit>,
    key: impl Fn(&Unit) -> i64,
    use_cost_tiebreak: bool,
) -> Option<&'a Unit> {
    let mut best: Option<&'a Unit> = None;
    for target in targets {
        best = Some(match best {
            None => target,
            Some(current) => {
                let (cur, cand) = (key(current), key(target));
                if cand > cur {
                    target
                } else if cand == cur {
                    better_target(current, target, use_cost_tiebreak)
                } else {
                    current
                }
            }
        });
    }
    best
}

fn by_mana<'a>(targets: &[&'a Unit]) -> Option<&'a Unit> {
    best_by_max(targets.iter().copied(), |u| i64::from(u.mana_cost), false)
}

fn kill_shot<'a>(attacker: &Unit, targets: &[&'a Unit]) -> Option<&'a Unit> {
    let hp = |u: &Unit| i64::from(u.current_hp);
    let killable = targets
        .iter()
        .copied()
        .filter(|t| attacker.effective_attack >= t.current_hp);

    best_by_max(killable, hp, true).or_else(|| best_by_max(targets.iter().copied(), hp, true))
}

fn optimize_damage<'a>(attacker: &Unit, targets: &[&'a Unit]) -> Option<&'a Unit> {
    let remaining = |u: &Unit| i64::from(u.current_hp) - i64::from(attacker.effective_attack);

    // Smallest non-negative remainder: the hit lands without overkill.
    let clean = targets.iter().copied().filter(|t| remaining(t) >= 0);
    if let Some(best) = best_by_max(clean, |u| -remaining(u), true) {
        return Some(best);
    }

    // Everything is overkilled: waste as little as possible.
    best_by_max(targets.iter().copied(), |u| -remaining(u).abs(), true)
}
