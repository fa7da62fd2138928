//! Turn phase state machine.
//!
//! ```text
//! NotStarted -> FirstTurn -> Draw -> Equalize -> Attack -> TurnComplete
//!                             ^                                 |
//!                             +---------------------------------+
//! ```
//!
//! Any phase may jump to `GameOver`, which is terminal.

use serde::{Deserialize, Serialize};

/// Where a match is within its turn cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Built, no turn played yet.
    #[default]
    NotStarted,
    /// Opening turn setup (starting mana).
    FirstTurn,
    /// Independent draw loops for both players.
    Draw,
    /// Catch-up draws for the player with fewer units.
    Equalize,
    /// Speed-ordered attacks.
    Attack,
    /// Between turns.
    TurnComplete,
    /// The match is decided.
    GameOver,
}

impl TurnPhase {
    /// Check if moving from `self` to `next` is a legal transition.
    #[must_use]
    pub fn can_advance_to(self, next: TurnPhase) -> bool {
        use TurnPhase::*;
        match (self, next) {
            (GameOver, _) => false,
            (_, GameOver) => true,
            (NotStarted, FirstTurn)
            | (FirstTurn, Draw)
            | (Draw, Equalize)
            | (Equalize, Attack)
            | (Attack, TurnComplete)
            | (TurnComplete, Draw) => true,
            _ => false,
        }
    }

    /// Check if no further phase can follow.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == TurnPhase::GameOver
    }
}
