// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Drag state that turns pointer gestures into move intents.
//!
//! A session tracks which item is being dragged and where it would land.
//! It holds no items itself; dropping hands the resulting intent to an
//! `ItemStore`.

use tracing::trace;

use crate::error::ReorderError;
use crate::item::Calculation;
use crate::item::Intent;
use crate::item::ItemId;
use crate::item::Placement;
use crate::store::ItemStore;

/// Where the dragged item would currently land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropTarget {
    pub target: ItemId,
    pub placement: Placement,
}

/// An in-progress drag, or none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragSession {
    dragged: Option<ItemId>,
    drop_target: Option<DropTarget>,
}

impl DragSession {
    pub fn new() -> DragSession {
        return DragSession::default();
    }

    /// Start dragging an item, discarding any previous drag.
    pub fn begin(&mut self, item: ItemId) {
        trace!(%item, "drag started");
        self.dragged = Some(item);
        self.drop_target = None;
    }

    /// The pointer is over `target`.
    ///
    /// Hovering over the dragged item itself clears the drop target.
    pub fn hover(&mut self, target: ItemId, placement: Placement) {
        if self.dragged.is_none() || self.dragged == Some(target) {
            self.drop_target = None;
            return;
        }
        self.drop_target = Some(DropTarget { target, placement });
    }

    /// The pointer left the current target.
    pub fn leave(&mut self) {
        self.drop_target = None;
    }

    /// Abandon the drag without moving anything.
    pub fn cancel(&mut self) {
        self.dragged = None;
        self.drop_target = None;
    }

    /// The item being dragged.
    pub fn dragged(&self) -> Option<ItemId> {
        return self.dragged;
    }

    /// The current drop target.
    pub fn drop_target(&self) -> Option<DropTarget> {
        return self.drop_target;
    }

    /// The move a drop would request right now.
    pub fn intent(&self) -> Option<Intent> {
        let item = self.dragged?;
        let DropTarget { target, placement } = self.drop_target?;
        return Some(Intent { item, target, placement });
    }

    /// Finish the drag and apply its move to `store`.
    ///
    /// The session is reset whether or not a move happens. Without a drop
    /// target this returns `Ok(None)`.
    pub fn drop(&mut self, store: &mut ItemStore) -> Result<Option<Calculation>, ReorderError> {
        let intent = self.intent();
        self.cancel();
        return match intent {
            Some(intent) => store.apply(&intent),
            None => Ok(None),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordkey::Generator;

    fn fruit() -> (ItemStore, Vec<ItemId>) {
        let store = ItemStore::fruit(Generator::default()).unwrap();
        let ids = store.sorted().iter().map(|item| item.id).collect();
        return (store, ids);
    }

    #[test]
    fn drag_and_drop_moves_item() {
        let (mut store, ids) = fruit();
        let mut session = DragSession::new();

        session.begin(ids[0]);
        session.hover(ids[2], Placement::After);
        assert_eq!(
            session.intent(),
            Some(Intent { item: ids[0], target: ids[2], placement: Placement::After })
        );

        let calc = session.drop(&mut store).unwrap().unwrap();
        assert_eq!(calc.item, "Apple");
        assert_eq!(calc.new, "ci");
        assert_eq!(session, DragSession::default());

        let order: Vec<ItemId> = store.sorted().iter().map(|item| item.id).collect();
        assert_eq!(order, [ids[1], ids[2], ids[0], ids[3], ids[4]]);
    }

    #[test]
    fn hovering_over_dragged_item_clears_target() {
        let (_, ids) = fruit();
        let mut session = DragSession::new();
        session.begin(ids[1]);
        session.hover(ids[3], Placement::Before);
        assert!(session.drop_target().is_some());
        session.hover(ids[1], Placement::Before);
        assert!(session.drop_target().is_none());
        assert_eq!(session.dragged(), Some(ids[1]));
    }

    #[test]
    fn hover_without_drag_is_ignored() {
        let (_, ids) = fruit();
        let mut session = DragSession::new();
        session.hover(ids[0], Placement::After);
        assert!(session.intent().is_none());
    }

    #[test]
    fn drop_after_leave_does_nothing() {
        let (mut store, ids) = fruit();
        let mut session = DragSession::new();
        session.begin(ids[4]);
        session.hover(ids[0], Placement::Before);
        session.leave();
        assert_eq!(session.drop(&mut store).unwrap(), None);
        assert_eq!(session.dragged(), None);
        assert_eq!(store.sorted().last().map(|item| item.id), Some(ids[4]));
    }

    #[test]
    fn cancel_resets() {
        let (_, ids) = fruit();
        let mut session = DragSession::new();
        session.begin(ids[0]);
        session.hover(ids[1], Placement::After);
        session.cancel();
        assert_eq!(session, DragSession::default());
    }
}
