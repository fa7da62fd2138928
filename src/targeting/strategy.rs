//! Targeting strategies, fixed per player for a whole match.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a player's units choose which enemy unit to hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetingStrategy {
    /// Hit the most expensive enemy.
    TargetMana,
    /// Finish off the toughest enemy that dies to this hit, else the
    /// toughest enemy overall.
    KillShot,
    /// Waste as little damage as possible.
    OptimizeDamage,
}

impl TargetingStrategy {
    /// Every strategy, in canonical order.
    pub const ALL: [TargetingStrategy; 3] = [
        TargetingStrategy::TargetMana,
        TargetingStrategy::KillShot,
        TargetingStrategy::OptimizeDamage,
    ];

    /// The kebab-case name used in deck lists.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TargetingStrategy::TargetMana => "target-mana",
            TargetingStrategy::KillShot => "kill-shot",
            TargetingStrategy::OptimizeDamage => "optimize-damage",
        }
    }
}

impl std::fmt::Display for TargetingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised strategy name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown targeting strategy '{0}'")]
pub struct UnknownStrategy(pub String);

impl FromStr for TargetingStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
