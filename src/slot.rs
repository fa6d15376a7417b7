//! Injection categories, placements, and the eight named layer slots.

use std::fmt;

/// A structural point in scene construction where a layer pair can be injected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Backdrop behind everything else in the scene.
    Background,
    /// Decoration drawn over the background (title screens).
    Foreground,
    /// The map or battle sprite set.
    Spriteset,
    /// The container holding the scene's windows.
    WindowLayer,
}

impl Category {
    /// All categories, in construction order.
    pub const ALL: [Category; 4] = [
        Category::Background,
        Category::Foreground,
        Category::Spriteset,
        Category::WindowLayer,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Get the category name as a string slice.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Background => "Background",
            Category::Foreground => "Foreground",
            Category::Spriteset => "Spriteset",
            Category::WindowLayer => "WindowLayer",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the host's own content a layer sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placement {
    /// Inserted before the host builds the category's content.
    Before,
    /// Inserted after the host's content, so it draws above it.
    After,
}

impl Placement {
    /// Get the placement name as a string slice.
    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Before => "Before",
            Placement::After => "After",
        }
    }
}

/// One of the eight named registry slots.
///
/// Displays as the concatenated placement and category, e.g. `BeforeBackground`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId {
    pub category: Category,
    pub placement: Placement,
}

impl SlotId {
    /// Every slot, ordered by category then placement.
    pub const ALL: [SlotId; 8] = [
        SlotId::before(Category::Background),
        SlotId::after(Category::Background),
        SlotId::before(Category::Foreground),
        SlotId::after(Category::Foreground),
        SlotId::before(Category::Spriteset),
        SlotId::after(Category::Spriteset),
        SlotId::before(Category::WindowLayer),
        SlotId::after(Category::WindowLayer),
    ];

    /// Create a slot id from its parts.
    pub const fn new(category: Category, placement: Placement) -> Self {
        Self {
            category,
            placement,
        }
    }

    /// The Before slot of `category`.
    pub const fn before(category: Category) -> Self {
        Self::new(category, Placement::Before)
    }

    /// The After slot of `category`.
    pub const fn after(category: Category) -> Self {
        Self::new(category, Placement::After)
    }

    pub(crate) fn index(self) -> usize {
        self.category.index() * 2
            + match self.placement {
                Placement::Before => 0,
                Placement::After => 1,
            }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.placement.as_str(), self.category.as_str())
    }
}

/// Contents of a registry slot.
///
/// Emptiness is an explicit variant so teardown checks occupancy before
/// issuing a destroy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Slot<L> {
    #[default]
    Empty,
    Occupied(L),
}

impl<L: Copy> Slot<L> {
    /// The held layer, if any.
    pub fn layer(&self) -> Option<L> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(layer) => Some(*layer),
        }
    }

    /// Whether a layer is held.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// Take the held layer out, leaving the slot empty.
    pub fn take(&mut self) -> Slot<L> {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_indices_follow_all_order() {
        for (i, slot) in SlotId::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn slot_display_names() {
        let names: Vec<String> = SlotId::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            [
                "BeforeBackground",
                "AfterBackground",
                "BeforeForeground",
                "AfterForeground",
                "BeforeSpriteset",
                "AfterSpriteset",
                "BeforeWindowLayer",
                "AfterWindowLayer",
            ]
        );
    }

    #[test]
    fn slot_take_empties() {
        let mut slot = Slot::Occupied(7u32);
        assert_eq!(slot.take(), Slot::Occupied(7));
        assert_eq!(slot, Slot::Empty);
        assert_eq!(slot.layer(), None);
    }
}
