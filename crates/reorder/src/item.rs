// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Items and the moves that can be requested on them.

use std::fmt;

use ordkey::Key;

/// Identifies an item within one store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "#{}", self.0);
    }
}

/// A list entry: a display value plus the key it sorts by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub key: Key,
}

/// Which side of the target item to drop on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

impl Placement {
    /// Pick a side from the pointer's vertical position over the target.
    ///
    /// Above the target's vertical midpoint is `Before`, anything else is
    /// `After`.
    pub fn from_pointer(pointer_y: f64, top: f64, height: f64) -> Placement {
        let mid = top + height / 2.0;
        if pointer_y < mid {
            return Placement::Before;
        }
        return Placement::After;
    }
}

/// Place `item` immediately before or after `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intent {
    pub item: ItemId,
    pub target: ItemId,
    pub placement: Placement,
}

/// What a completed move computed, for display.
///
/// Keys are rendered in the store's alphabet. Absent neighbors are `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calculation {
    /// Display value of the moved item.
    pub item: String,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub new: String,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let none = "(none)";
        writeln!(f, "Moved:          {}", self.item)?;
        writeln!(f, "Previous order: {}", self.prev.as_deref().unwrap_or(none))?;
        writeln!(f, "Next order:     {}", self.next.as_deref().unwrap_or(none))?;
        return write!(f, "New order:      {}", self.new);
    }
}
