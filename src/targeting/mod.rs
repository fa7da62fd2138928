//! Targeting: which enemy unit an attacker hits.
//!
//! Each player picks one `TargetingStrategy` for the whole match. The
//! resolver is a pure function of the attacker, the strategy and the
//! defender's living units, so it can be tested without a match.

pub mod resolver;
pub mod strategy;

pub use resolver::{better_target, select_target};
pub use strategy::{TargetingStrategy, UnknownStrategy};
