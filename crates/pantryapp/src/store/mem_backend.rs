use super::backend::StorageBackend;
use crate::error::{PantryError, Result};
use crate::model::Item;
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since pantry is single-threaded.
/// `None` stands for "never written", the equivalent of an absent file.
#[derive(Default)]
pub struct MemBackend {
    items: RefCell<Option<Vec<Item>>>,
    simulate_write_error: Cell<bool>,
    writes: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated as if a file with `items` already existed.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RefCell::new(Some(items)),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful `write_items` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn load_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.borrow().clone().unwrap_or_default())
    }

    fn write_items(&self, items: &[Item]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(PantryError::Store("Simulated write error".to_string()));
        }
        *self.items.borrow_mut() = Some(items.to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.items.borrow().is_some()
    }

    fn location(&self) -> String {
        "memory://items".to_string()
    }
}
