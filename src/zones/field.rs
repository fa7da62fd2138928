//! Field: a player's fixed-capacity row of unit slots.
//!
//! The `Field` tracks which units are in play and in which slot. It
//! supports:
//! - Placing a unit in the first free slot
//! - Lookup and mutation by `UnitId`
//! - Removing dead units with a stable left-slide, so survivors keep their
//!   relative order and empty slots collect at the end
//!
//! Slot position only matters for presentation. Combat order is decided
//! by speed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Unit;
use crate::core::entity::UnitId;

/// Inline slot storage sized for the standard five-slot field.
pub type Slots = SmallVec<[Option<Unit>; 5]>;

/// A player's field.
///
/// ## Usage
///
/// ```
/// use deck_brawl::cards::{CardCatalog, DeckArchetype, Unit};
/// use deck_brawl::core::{PlayerId, UnitId};
/// use deck_brawl::zones::Field;
///
/// let catalog = CardCatalog::standard();
/// let goblin = catalog.get("Goblin").unwrap();
///
/// let mut field = Field::new(5);
/// let slot = field.place(Unit::spawn(UnitId(1), PlayerId::P1, goblin, DeckArchetype::Hardy));
///
/// assert_eq!(slot, Some(0));
/// assert_eq!(field.len(), 1);
/// assert_eq!(field.free_slots(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    slots: Slots,
}

impl Field {
    /// Create an empty field with `capacity` slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Check if no unit is on the field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of empty slots.
    #[must_use]
    pub fn free_slots(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Check if every slot is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.free_slots() == 0
    }

    /// Place a unit in the first free slot.
    ///
    /// Returns the slot index, or `None` (dropping the unit) if full.
    pub fn place(&mut self, unit: Unit) -> Option<usize> {
        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(unit);
        Some(index)
    }

    /// Raw slot view, empty slots included.
    #[must_use]
    pub fn slots(&self) -> &[Option<Unit>] {
        &self.slots
    }

    /// Unit IDs per slot.
    #[must_use]
    pub fn layout(&self) -> Vec<Option<UnitId>> {
        self.slots.iter().map(|s| s.as_ref().map(|u| u.id)).collect()
    }

    /// Occupied slots in slot order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.slots.iter().flatten()
    }

    /// Occupied slots in slot order, mutably.
    pub fn units_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.slots.iter_mut().flatten()
    }

    /// Living units in slot order.
    pub fn living(&self) -> impl Iterator<Item = &Unit> {
        self.units().filter(|u| u.is_alive())
    }

    /// Number of living units.
    #[must_use]
    pub fn living_count(&self) -> usize {
        self.living().count()
    }

    /// Find a unit by ID.
    #[must_use]
    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units().find(|u| u.id == id)
    }

    /// Find a unit by ID, mutably.
    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units_mut().find(|u| u.id == id)
    }

    /// Slot index of a unit.
    #[must_use]
    pub fn position(&self, id: UnitId) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|u| u.id == id))
    }

    /// Remove every dead unit and compact the survivors to the left.
    ///
    /// Returns the removed units in slot order.
    pub fn remove_dead(&mut self) -> Vec<Unit> {
        let mut removed = Vec::new();
        for slot in self.slots.iter_mut() {
            if slot.as_ref().is_some_and(|u| !u.is_alive()) {
                removed.extend(slot.take());
            }
        }
        self.compact();
        removed
    }

    /// Slide occupied slots to the front, keeping their relative order.
    pub fn compact(&mut self) {
        let capacity = self.capacity();
        let mut packed: Slots = self.slots.drain(..).filter(Option::is_some).collect();
        packed.resize_with(capacity, || None);
        self.slots = packed;
    }

    /// Take every unit off the field, leaving all slots empty.
    pub fn clear(&mut self) -> Vec<Unit> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }
}
