//! # Category Collections
//!
//! A [`Collection`] is an in-memory view of one category's items over a shared
//! [`ItemStore`]. It is loaded once, at construction: a change persisted
//! through one collection (or through the store directly) is not visible to
//! another collection until that one is reloaded or rebuilt.
//!
//! In-memory edits (`add`, `extend`, `remove`) touch nothing on disk. Only
//! `append` and `save` persist, and both go through the store's category-scoped
//! `save`.

use crate::error::{PantryError, Result};
use crate::model::{Category, Item, Unit};
use crate::store::{ItemStore, StorageBackend};
use std::rc::Rc;

pub struct Collection<B: StorageBackend> {
    category: Category,
    store: Rc<ItemStore<B>>,
    items: Vec<Item>,
}

impl<B: StorageBackend> Collection<B> {
    /// Loads the items of `category` from `store`, keeping file order.
    pub fn load(category: Category, store: Rc<ItemStore<B>>) -> Result<Self> {
        let items = Self::read_own(category, &store)?;
        Ok(Self {
            category,
            store,
            items,
        })
    }

    fn read_own(category: Category, store: &ItemStore<B>) -> Result<Vec<Item>> {
        Ok(store
            .read()?
            .into_iter()
            .filter(|item| item.category == category)
            .collect())
    }

    /// Discards in-memory state and re-reads this category from the store.
    pub fn reload(&mut self) -> Result<()> {
        self.items = Self::read_own(self.category, &self.store)?;
        Ok(())
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Raw held items, in their stored units.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check_category(&self, item: &Item) -> Result<()> {
        if item.category != self.category {
            return Err(PantryError::CategoryMismatch {
                expected: self.category,
                found: item.category,
            });
        }
        Ok(())
    }

    /// Appends in memory. No persistence, no duplicate check.
    pub fn add(&mut self, item: Item) -> Result<()> {
        self.check_category(&item)?;
        self.items.push(item);
        Ok(())
    }

    /// Appends a batch in memory. Either every item is accepted or none is.
    pub fn extend(&mut self, new_items: Vec<Item>) -> Result<()> {
        for item in &new_items {
            self.check_category(item)?;
        }
        self.items.extend(new_items);
        Ok(())
    }

    /// Removes the first item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Copies of every held item expressed in `unit`.
    pub fn list(&self, unit: Unit) -> Vec<Item> {
        self.items.iter().map(|item| item.in_unit(unit)).collect()
    }

    /// Case-insensitive substring match on name.
    pub fn search(&self, term: &str) -> Vec<Item> {
        let term = term.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&term))
            .cloned()
            .collect()
    }

    /// Items (in stored units) for which `predicate` holds.
    pub fn filter<F>(&self, predicate: F) -> Vec<Item>
    where
        F: Fn(&Item) -> bool,
    {
        self.items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Extends in memory, then persists through the category-scoped save.
    ///
    /// An empty batch goes through the store's keep-everything path, so the
    /// file keeps its row order.
    pub fn append(&mut self, new_items: Vec<Item>) -> Result<()> {
        if new_items.is_empty() {
            return self.store.save(&[]);
        }
        self.extend(new_items)?;
        self.save()
    }

    /// Persists the held items through the category-scoped save.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.items)
    }
}
