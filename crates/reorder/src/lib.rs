// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Drag-and-drop list reordering backed by fractional order keys.
//!
//! | Piece | Role |
//! |-------|------|
//! | `ItemStore` | Holds items, sorts them by key, writes new keys |
//! | `DragSession` | Tracks a drag and turns it into an `Intent` |
//! | `Calculation` | Report of the keys a move read and wrote |
//!
//! # Example
//!
//! ```
//! use ordkey::Generator;
//! use reorder::{DragSession, ItemStore, Placement};
//!
//! let mut store = ItemStore::fruit(Generator::default()).unwrap();
//! let ids: Vec<_> = store.sorted().iter().map(|item| item.id).collect();
//!
//! let mut session = DragSession::new();
//! session.begin(ids[4]);
//! session.hover(ids[0], Placement::Before);
//! let calc = session.drop(&mut store).unwrap().unwrap();
//!
//! assert_eq!(calc.item, "Elderberry");
//! assert_eq!(store.sorted()[0].text, "Elderberry");
//! ```

pub mod error;
pub mod item;
pub mod session;
pub mod store;

pub use error::ReorderError;
pub use item::Calculation;
pub use item::Intent;
pub use item::Item;
pub use item::ItemId;
pub use item::Placement;
pub use session::DragSession;
pub use session::DropTarget;
pub use store::ItemStore;
