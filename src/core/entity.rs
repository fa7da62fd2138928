//! Unit identification.
//!
//! Every unit placed on a field gets a unique `UnitId`. IDs are handed out
//! by the match state in strictly increasing order, so a higher ID always
//! means a later draw. IDs are never reused within a match, even after the
//! unit dies and moves to the discard pile.
//!
//! ```
//! use deck_brawl::core::UnitId;
//!
//! let first = UnitId::FIRST;
//! let second = first.next();
//!
//! assert!(second > first);
//! assert_eq!(second.raw(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a unit instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// The first ID allocated in a match.
    pub const FIRST: UnitId = UnitId(1);

    /// Create a unit ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The ID allocated right after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for UnitId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}
