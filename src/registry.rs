//! Shared storage for the eight injected layer slots.

use crate::slot::{Category, Slot, SlotId};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The current set of injected layers, one per [`SlotId`].
///
/// `LayerRegistry` is a handle: cloning it shares the same slots. Subscriber
/// callbacks capture a clone and read the accessors while they are notified.
/// Only the hook and teardown code in this crate writes to it.
///
/// The registry reflects the most recently constructed scene only. Handles read
/// from it must not be kept past that scene's termination.
pub struct LayerRegistry<L> {
    slots: Rc<RefCell<[Slot<L>; 8]>>,
}

impl<L> Clone for LayerRegistry<L> {
    fn clone(&self) -> Self {
        Self {
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<L: Copy> Default for LayerRegistry<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Copy + fmt::Debug> fmt::Debug for LayerRegistry<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.slots.borrow();
        let mut map = f.debug_map();
        for id in SlotId::ALL {
            map.entry(&id.to_string(), &slots[id.index()]);
        }
        map.finish()
    }
}

impl<L: Copy> LayerRegistry<L> {
    /// Create a registry with every slot empty.
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new([Slot::Empty; 8])),
        }
    }

    /// Get the contents of a slot.
    pub fn slot(&self, id: SlotId) -> Slot<L> {
        self.slots.borrow()[id.index()]
    }

    /// Get the layer held by a slot, if any.
    pub fn get(&self, id: SlotId) -> Option<L> {
        self.slot(id).layer()
    }

    pub fn is_occupied(&self, id: SlotId) -> bool {
        self.slot(id).is_occupied()
    }

    /// All occupied slots with their layers, in [`SlotId::ALL`] order.
    pub fn occupied(&self) -> Vec<(SlotId, L)> {
        let slots = self.slots.borrow();
        SlotId::ALL
            .iter()
            .filter_map(|&id| slots[id.index()].layer().map(|layer| (id, layer)))
            .collect()
    }

    /// The layer injected below the background, if constructed.
    pub fn before_background(&self) -> Option<L> {
        self.get(SlotId::before(Category::Background))
    }

    /// The layer injected above the background, if constructed.
    pub fn after_background(&self) -> Option<L> {
        self.get(SlotId::after(Category::Background))
    }

    /// The layer injected below the foreground, if constructed.
    pub fn before_foreground(&self) -> Option<L> {
        self.get(SlotId::before(Category::Foreground))
    }

    /// The layer injected above the foreground, if constructed.
    pub fn after_foreground(&self) -> Option<L> {
        self.get(SlotId::after(Category::Foreground))
    }

    /// The layer injected below the sprite set, if constructed.
    pub fn before_spriteset(&self) -> Option<L> {
        self.get(SlotId::before(Category::Spriteset))
    }

    /// The layer injected above the sprite set, if constructed.
    pub fn after_spriteset(&self) -> Option<L> {
        self.get(SlotId::after(Category::Spriteset))
    }

    /// The layer injected below the window layer, if constructed.
    pub fn before_window_layer(&self) -> Option<L> {
        self.get(SlotId::before(Category::WindowLayer))
    }

    /// The layer injected above the window layer, if constructed.
    pub fn after_window_layer(&self) -> Option<L> {
        self.get(SlotId::after(Category::WindowLayer))
    }

    /// Reset every slot to empty without destroying anything.
    ///
    /// Layers still held are forgotten, not released; teardown destroys them
    /// first.
    pub fn clear(&self) {
        *self.slots.borrow_mut() = [Slot::Empty; 8];
    }

    /// Store `layer` in a slot, returning whatever was there before.
    pub(crate) fn fill(&self, id: SlotId, layer: L) -> Slot<L> {
        std::mem::replace(&mut self.slots.borrow_mut()[id.index()], Slot::Occupied(layer))
    }

    /// Empty a slot, returning its previous contents.
    pub(crate) fn take(&self, id: SlotId) -> Slot<L> {
        self.slots.borrow_mut()[id.index()].take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_registry_is_empty() {
        let registry = LayerRegistry::<u32>::new();
        assert!(registry.occupied().is_empty());
        assert_eq!(registry.before_background(), None);
        assert_eq!(registry.after_window_layer(), None);
    }

    #[test]
    fn accessors_read_their_own_slot() {
        let registry = LayerRegistry::new();
        for (i, id) in SlotId::ALL.iter().enumerate() {
            registry.fill(*id, i as u32);
        }

        assert_eq!(registry.before_background(), Some(0));
        assert_eq!(registry.after_background(), Some(1));
        assert_eq!(registry.before_foreground(), Some(2));
        assert_eq!(registry.after_foreground(), Some(3));
        assert_eq!(registry.before_spriteset(), Some(4));
        assert_eq!(registry.after_spriteset(), Some(5));
        assert_eq!(registry.before_window_layer(), Some(6));
        assert_eq!(registry.after_window_layer(), Some(7));
    }

    #[test]
    fn clones_share_slots() {
        let registry = LayerRegistry::new();
        let reader = registry.clone();
        registry.fill(SlotId::after(Category::Spriteset), 42u32);
        assert_eq!(reader.after_spriteset(), Some(42));
    }

    #[test]
    fn fill_replaces_previous() {
        let registry = LayerRegistry::new();
        let id = SlotId::before(Category::Background);
        assert_eq!(registry.fill(id, 1u32), Slot::Empty);
        assert_eq!(registry.fill(id, 2), Slot::Occupied(1));
        assert_eq!(registry.get(id), Some(2));
    }

    #[test]
    fn occupied_lists_in_slot_order() {
        let registry = LayerRegistry::new();
        registry.fill(SlotId::after(Category::WindowLayer), 9u32);
        registry.fill(SlotId::before(Category::Background), 3);

        assert_eq!(
            registry.occupied(),
            vec![
                (SlotId::before(Category::Background), 3),
                (SlotId::after(Category::WindowLayer), 9),
            ]
        );
    }

    #[test]
    fn clear_is_idempotent() {
        let registry = LayerRegistry::new();
        registry.fill(SlotId::before(Category::Foreground), 5u32);
        registry.clear();
        registry.clear();
        assert!(registry.occupied().is_empty());
        assert_eq!(registry.take(SlotId::before(Category::Foreground)), Slot::Empty);
    }
}
