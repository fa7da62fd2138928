//! Card system: definitions, catalog, archetypes, and units.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static base stats of a card type
//! - `CardCatalog`: Closed name-keyed lookup of all card types
//! - `DeckArchetype`: Per-deck modifier applied when a unit is created
//! - `Unit`: A drawn card with mutable combat state
//! - `Tribe`: Tribal family used by synergy buffs

pub mod archetype;
pub mod definition;
pub mod instance;
pub mod registry;

pub use archetype::{round_half_up, BaseStats, DeckArchetype, UnknownArchetype};
pub use definition::{CardDefinition, Tribe};
pub use instance::Unit;
pub use registry::CardCatalog;
