//! Match rules: the turn engine and everything it decides.
//!
//! - [`Match`]: owns a battle and runs its turns
//! - [`TurnPhase`]: the phase state machine
//! - [`build_attack_queue`]: speed ordering with seeded tie-breaks
//! - [`GameResult`] and [`evaluate`]: win conditions
//! - [`MatchSnapshot`]: serializable read-only view

pub mod engine;
pub mod phase;
pub mod queue;
pub mod result;
pub mod snapshot;

pub use engine::Match;
pub use phase::TurnPhase;
pub use queue::{build_attack_queue, sort_by_speed, QueueEntry};
pub use result::{evaluate, exhausted_loser, GameResult};
pub use snapshot::{MatchSnapshot, PlayerSnapshot};
