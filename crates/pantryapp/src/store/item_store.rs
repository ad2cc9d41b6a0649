use super::backend::StorageBackend;
use crate::error::Result;
use crate::model::Item;

pub struct ItemStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> ItemStore<B> {
    /// Wraps `backend`, writing a header-only store if nothing exists yet.
    pub fn open(backend: B) -> Result<Self> {
        if !backend.is_initialized() {
            log::debug!("Initializing empty store at {}", backend.location());
            backend.write_items(&[])?;
        }
        Ok(Self { backend })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Every persisted item, in file order.
    pub fn read(&self) -> Result<Vec<Item>> {
        self.backend.load_items()
    }

    /// Category-scoped save.
    ///
    /// The category of `new_items[0]` is treated as the batch's category: every
    /// existing item of that category is replaced by `new_items`, all other
    /// items are kept as they are. An empty batch keeps everything unchanged.
    pub fn save(&self, new_items: &[Item]) -> Result<()> {
        let existing = self.read()?;

        let to_save = match new_items.first() {
            None => existing,
            Some(first) => {
                let category = first.category;
                if new_items.iter().any(|item| item.category != category) {
                    log::warn!(
                        "Category-scoped save of a mixed batch; only {} items are replaced",
                        category
                    );
                }
                let mut kept: Vec<Item> = existing
                    .into_iter()
                    .filter(|item| item.category != category)
                    .collect();
                kept.extend_from_slice(new_items);
                kept
            }
        };

        self.backend.write_items(&to_save)
    }

    /// Unconditional overwrite with exactly `all_items`.
    pub fn save_all(&self, all_items: &[Item]) -> Result<()> {
        self.backend.write_items(all_items)
    }
}
