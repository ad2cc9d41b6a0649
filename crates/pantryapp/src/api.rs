//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every pantry operation.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Loads state** by building a fresh [`Inventory`] for each call
//! - **Returns structured types** (`Result<IngestReport>`, `Result<ItemListing>`, ...)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Field validation**: Front ends run [`crate::validation`] first
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Fresh State Per Operation
//!
//! Collections snapshot the store when they load and never re-read it. A
//! long-lived collection would therefore persist stale data on its next save.
//! The facade only holds the shared [`ItemStore`]; every method loads its own
//! `Inventory`, so each operation starts from what is on disk now.
//!
//! Mutating methods take `&mut self`, so one `PantryApi` never interleaves two
//! read-modify-write cycles. Nothing guards against a second process writing
//! the same file.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `PantryApi<CsvBackend>`
//! - Testing: `PantryApi<MemBackend>`

use crate::commands::{self, AddOutcome, IngestReport, ItemFilter, ItemListing};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::{Category, ItemRecord, Unit};
use crate::store::{CsvBackend, ItemStore, StorageBackend};
use std::path::PathBuf;
use std::rc::Rc;

/// The main API facade for pantry operations.
pub struct PantryApi<B: StorageBackend> {
    store: Rc<ItemStore<B>>,
}

impl PantryApi<CsvBackend> {
    /// Opens (creating if needed) the CSV store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::new(CsvBackend::new(path))
    }
}

impl<B: StorageBackend> PantryApi<B> {
    pub fn new(backend: B) -> Result<Self> {
        let store = ItemStore::open(backend)?;
        Ok(Self {
            store: Rc::new(store),
        })
    }

    pub fn store(&self) -> &ItemStore<B> {
        &self.store
    }

    fn inventory(&self) -> Result<Inventory<B>> {
        Inventory::load(Rc::clone(&self.store))
    }

    pub fn ingest(&mut self, records: Vec<ItemRecord>) -> Result<IngestReport> {
        let mut inventory = self.inventory()?;
        commands::ingest::run(&mut inventory, records)
    }

    pub fn query(
        &self,
        category: Option<Category>,
        filter: &ItemFilter,
        unit: Unit,
    ) -> Result<ItemListing> {
        let inventory = self.inventory()?;
        commands::query::run(&inventory, category, filter, unit)
    }

    pub fn add_one(&mut self, record: ItemRecord) -> Result<AddOutcome> {
        let mut inventory = self.inventory()?;
        commands::add::run(&mut inventory, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::DuplicateReason;
    use crate::model::Item;
    use crate::store::MemBackend;
    use crate::test_utils::{record, TestEnv};

    fn api() -> PantryApi<MemBackend> {
        PantryApi::new(MemBackend::new()).unwrap()
    }

    #[test]
    fn test_new_initializes_empty_store() {
        let api = api();
        assert!(api.store().backend().is_initialized());
        assert!(api.store().read().unwrap().is_empty());
    }

    #[test]
    fn test_ingest_then_query_sees_new_items() {
        let mut api = api();
        let report = api
            .ingest(vec![
                record(1, "Apple", Category::Fruit, 1.5, Unit::Kilogram),
                record(2, "Carrot", Category::Vegetable, 300.0, Unit::Gram),
            ])
            .unwrap();
        assert_eq!(report.total_processed, 2);

        let listing = api.query(None, &ItemFilter::default(), Unit::Gram).unwrap();
        assert_eq!(listing.fruits.as_ref().unwrap()[0].quantity, 1500.0);
        assert_eq!(listing.vegetables.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_each_operation_sees_previous_writes() {
        let mut api = api();
        api.ingest(vec![record(1, "Apple", Category::Fruit, 1.0, Unit::Gram)])
            .unwrap();

        // A stale snapshot would accept this
        let outcome = api
            .add_one(record(1, "Pear", Category::Fruit, 1.0, Unit::Gram))
            .unwrap();
        assert_eq!(
            outcome,
            AddOutcome::Duplicate {
                reason: DuplicateReason::Id
            }
        );

        api.add_one(record(2, "Leek", Category::Vegetable, 1.0, Unit::Gram))
            .unwrap();
        let second = api
            .ingest(vec![record(2, "Onion", Category::Vegetable, 1.0, Unit::Gram)])
            .unwrap();
        assert_eq!(second.duplicates.len(), 1);
        assert_eq!(api.store().read().unwrap().len(), 2);
    }

    #[test]
    fn test_external_changes_are_picked_up() {
        let api = api();
        api.store()
            .save_all(&[Item::new(9, "Kale", Category::Vegetable, 50.0, Unit::Gram)])
            .unwrap();

        let listing = api
            .query(Some(Category::Vegetable), &ItemFilter::default(), Unit::Gram)
            .unwrap();
        assert_eq!(listing.vegetables.unwrap()[0].name, "Kale");
    }

    #[test]
    fn test_failed_write_surfaces_as_error() {
        let mut api = api();
        api.store().backend().set_simulate_write_error(true);
        assert!(api
            .add_one(record(1, "Apple", Category::Fruit, 1.0, Unit::Gram))
            .is_err());
        assert!(api
            .ingest(vec![record(1, "Apple", Category::Fruit, 1.0, Unit::Gram)])
            .is_err());
    }

    #[test]
    fn test_open_csv_store_round_trip() {
        let env = TestEnv::new();
        {
            let mut api = env.api();
            api.ingest(vec![
                record(1, "Apple", Category::Fruit, 1.5, Unit::Kilogram),
                record(2, "Carrot", Category::Vegetable, 300.0, Unit::Gram),
            ])
            .unwrap();
        }
        assert_eq!(
            env.read_csv(),
            "id,name,category,quantity,unit\n1,Apple,fruit,1.5,kg\n2,Carrot,vegetable,300,g\n"
        );

        let api = env.api();
        let listing = api
            .query(Some(Category::Fruit), &ItemFilter::default(), Unit::Gram)
            .unwrap();
        assert_eq!(listing.fruits.unwrap()[0].quantity, 1500.0);
    }
}
