// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Reorder error types.

use ordkey::GenerateError;
use ordkey::KeyError;
use thiserror::Error;

use crate::item::ItemId;

/// Errors that can occur while storing or moving items.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// The item is not in the store.
    #[error("item {id} not found")]
    UnknownItem {
        /// The missing item.
        id: ItemId,
    },

    /// A supplied key is not valid in the store's alphabet.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// No key fits the gap. With keys the store generated itself this only
    /// happens if two items were seeded with the same key.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}
