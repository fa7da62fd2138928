//! Event sinks: where the engine sends what happened.

use std::cell::RefCell;
use std::rc::Rc;

use super::event::BattleEvent;

/// Receiver for battle events.
///
/// The engine calls `emit` once per event, in order, as the turn runs.
pub trait EventSink {
    /// Receive one event.
    fn emit(&mut self, event: BattleEvent);
}

impl EventSink for Vec<BattleEvent> {
    fn emit(&mut self, event: BattleEvent) {
        self.push(event);
    }
}

/// Shared sink, so a caller can keep reading a log attached to a match.
impl<S: EventSink> EventSink for Rc<RefCell<S>> {
    fn emit(&mut self, event: BattleEvent) {
        self.borrow_mut().emit(event);
    }
}

/// In-memory event log.
///
/// ## Usage
///
/// ```
/// use deck_brawl::events::{BattleEvent, EventLog, EventSink};
///
/// let mut log = EventLog::new();
/// log.emit(BattleEvent::TurnStarted { turn: 1 });
/// log.emit(BattleEvent::TurnEnded { turn: 1 });
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.count_kind("turnEnded"), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<BattleEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over recorded events.
    pub fn iter(&self) -> impl Iterator<Item = &BattleEvent> {
        self.events.iter()
    }

    /// Count events of one kind (see [`BattleEvent::kind`]).
    #[must_use]
    pub fn count_kind(&self, kind: &str) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    /// Take every recorded event, leaving the log empty.
    pub fn drain(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Forget every recorded event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: BattleEvent) {
        self.events.push(event);
    }
}

impl From<EventLog> for Vec<BattleEvent> {
    fn from(log: EventLog) -> Self {
        log.events
    }
}
