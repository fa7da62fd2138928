//! Event stream for presentation and replay.
//!
//! The engine reports every state change as a [`BattleEvent`]. Turn
//! methods return the events they produced and also forward them to an
//! attached [`EventSink`], if any.
//!
//! ## Key Components
//!
//! - [`BattleEvent`]: one discrete thing that happened
//! - [`EventSink`]: receiver trait
//! - [`EventLog`]: `Vec`-backed sink

pub mod event;
pub mod sink;

pub use event::BattleEvent;
pub use sink::{EventLog, EventSink};
