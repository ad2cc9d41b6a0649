use crate::collection::Collection;
use crate::error::Result;
use crate::model::{Category, Item};
use crate::store::{ItemStore, StorageBackend};
use std::rc::Rc;

/// One collection per category over one shared store.
///
/// Built fresh for each API operation, so every operation starts from the
/// current persisted state.
pub struct Inventory<B: StorageBackend> {
    store: Rc<ItemStore<B>>,
    fruits: Collection<B>,
    vegetables: Collection<B>,
}

impl<B: StorageBackend> Inventory<B> {
    pub fn load(store: Rc<ItemStore<B>>) -> Result<Self> {
        let fruits = Collection::load(Category::Fruit, Rc::clone(&store))?;
        let vegetables = Collection::load(Category::Vegetable, Rc::clone(&store))?;
        Ok(Self {
            store,
            fruits,
            vegetables,
        })
    }

    pub fn store(&self) -> &ItemStore<B> {
        &self.store
    }

    pub fn collection(&self, category: Category) -> &Collection<B> {
        match category {
            Category::Fruit => &self.fruits,
            Category::Vegetable => &self.vegetables,
        }
    }

    pub fn collection_mut(&mut self, category: Category) -> &mut Collection<B> {
        match category {
            Category::Fruit => &mut self.fruits,
            Category::Vegetable => &mut self.vegetables,
        }
    }

    /// Every held item across categories, fruits first, in stored units.
    pub fn all_items(&self) -> Vec<Item> {
        Category::ALL
            .iter()
            .flat_map(|c| self.collection(*c).items().iter().cloned())
            .collect()
    }
}
