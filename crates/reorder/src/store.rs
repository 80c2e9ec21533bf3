// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! In-memory item store ordered by key.
//!
//! The store owns its items and a generator. Moving an item reads the two
//! items around the target gap, generates one key between them, and writes
//! it to the moved item. All three steps happen under `&mut self`, so no
//! other move can observe the neighbors in between.

use ordkey::Generator;
use ordkey::Key;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::ReorderError;
use crate::item::Calculation;
use crate::item::Intent;
use crate::item::Item;
use crate::item::ItemId;
use crate::item::Placement;

/// Items of the demo list, with their initial keys.
const FRUIT: [(&str, &str); 5] = [
    ("Apple", "a"),
    ("Banana", "b"),
    ("Cherry", "c"),
    ("Date", "d"),
    ("Elderberry", "e"),
];

/// A collection of items sorted by key.
#[derive(Clone, Debug)]
pub struct ItemStore {
    generator: Generator,
    items: FxHashMap<ItemId, Item>,
    next_id: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        return Self::new(Generator::default());
    }
}

impl ItemStore {
    /// Create an empty store.
    pub fn new(generator: Generator) -> ItemStore {
        return ItemStore {
            generator,
            items: FxHashMap::default(),
            next_id: 1,
        };
    }

    /// The demo list: five fruit keyed `a` through `e`.
    pub fn fruit(generator: Generator) -> Result<ItemStore, ReorderError> {
        let mut store = ItemStore::new(generator);
        for (text, key) in FRUIT {
            store.insert_with_key(text, key)?;
        }
        return Ok(store);
    }

    /// The generator new keys come from.
    pub fn generator(&self) -> &Generator {
        return &self.generator;
    }

    /// Add an item with an explicit textual key.
    ///
    /// The key is not checked against existing keys. Two items sharing a key
    /// leave no gap between them, and moves into that gap will fail.
    pub fn insert_with_key(&mut self, text: impl Into<String>, key: &str) -> Result<ItemId, ReorderError> {
        let key = self.generator.alphabet().parse(key)?;
        return Ok(self.insert(text.into(), key));
    }

    /// Add an item after the current last one.
    pub fn push(&mut self, text: impl Into<String>) -> Result<ItemId, ReorderError> {
        let last = self.items.values().map(|item| &item.key).max();
        let key = self.generator.generate(last, None)?;
        return Ok(self.insert(text.into(), key));
    }

    fn insert(&mut self, text: String, key: Key) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        debug!(%id, key = %self.render(&key), "inserting item");
        self.items.insert(id, Item { id, text, key });
        return id;
    }

    /// Look up an item.
    #[inline]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        return self.items.get(&id);
    }

    /// Remove an item. Other keys are untouched.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        return self.items.remove(&id);
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        return self.items.len();
    }

    /// Check if the store is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.items.is_empty();
    }

    /// Items in key order. Equal keys fall back to id order.
    pub fn sorted(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by(|a, b| a.key.cmp(&b.key).then(a.id.cmp(&b.id)));
        return items;
    }

    /// Render a key in this store's alphabet.
    pub fn render(&self, key: &Key) -> String {
        return self.generator.alphabet().render(key);
    }

    /// Replace an item's key.
    pub fn set_key(&mut self, id: ItemId, key: Key) -> Result<(), ReorderError> {
        let item = self.items.get_mut(&id).ok_or(ReorderError::UnknownItem { id })?;
        item.key = key;
        return Ok(());
    }

    /// The items on either side of the gap next to `target`.
    ///
    /// `Before` gives the item preceding `target` and `target` itself;
    /// `After` gives `target` and the item following it.
    pub fn neighbors(
        &self,
        target: ItemId,
        placement: Placement,
    ) -> Result<(Option<&Item>, Option<&Item>), ReorderError> {
        let sorted = self.sorted();
        let index = sorted
            .iter()
            .position(|item| item.id == target)
            .ok_or(ReorderError::UnknownItem { id: target })?;

        return match placement {
            Placement::Before => {
                let prev = index.checked_sub(1).map(|i| sorted[i]);
                Ok((prev, Some(sorted[index])))
            }
            Placement::After => Ok((Some(sorted[index]), sorted.get(index + 1).copied())),
        };
    }

    /// Move an item next to another one.
    ///
    /// Returns `Ok(None)` without touching any key when the move would not
    /// change the order: the item is dropped on itself, or the gap already
    /// borders it.
    pub fn apply(&mut self, intent: &Intent) -> Result<Option<Calculation>, ReorderError> {
        let moved = self
            .items
            .get(&intent.item)
            .ok_or(ReorderError::UnknownItem { id: intent.item })?;
        if intent.item == intent.target {
            return Ok(None);
        }

        let (prev, next) = self.neighbors(intent.target, intent.placement)?;
        let already_there = match intent.placement {
            Placement::Before => prev.map(|item| item.id) == Some(intent.item),
            Placement::After => next.map(|item| item.id) == Some(intent.item),
        };
        if already_there {
            debug!(item = %intent.item, "already in place, skipping move");
            return Ok(None);
        }

        let prev_key = prev.map(|item| item.key.clone());
        let next_key = next.map(|item| item.key.clone());
        let key = self.generator.generate(prev_key.as_ref(), next_key.as_ref())?;

        let calculation = Calculation {
            item: moved.text.clone(),
            prev: prev_key.as_ref().map(|key| self.render(key)),
            next: next_key.as_ref().map(|key| self.render(key)),
            new: self.render(&key),
        };
        debug!(
            item = %intent.item,
            prev = ?calculation.prev,
            next = ?calculation.next,
            new = %calculation.new,
            "moved item"
        );

        self.set_key(intent.item, key)?;
        return Ok(Some(calculation));
    }
}
