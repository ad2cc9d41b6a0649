use super::helpers::{DuplicateIndex, DuplicateReason};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::{Category, Item, ItemRecord};
use crate::store::StorageBackend;
use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "Data processed successfully";

/// What happened to one input record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RecordStatus {
    Stored,
    Duplicate { reason: DuplicateReason },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordOutcome {
    pub item: ItemRecord,
    #[serde(flatten)]
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateRecord {
    pub item: ItemRecord,
    pub reason: DuplicateReason,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestReport {
    pub fruits_count: usize,
    pub vegetables_count: usize,
    pub total_processed: usize,
    /// One entry per input record, in input order.
    pub outcomes: Vec<RecordOutcome>,
    pub duplicates: Vec<DuplicateRecord>,
    pub message: String,
}

impl IngestReport {
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Fruit => self.fruits_count,
            Category::Vegetable => self.vegetables_count,
        }
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// Batch ingestion.
///
/// Every record is checked against the state loaded in `inventory`, not
/// against other records of the same batch. Accepted items are appended to
/// their category's collection in memory, then the superset of all categories
/// is persisted with a single `save_all`. An empty batch still rewrites the
/// (unchanged) superset.
pub fn run<B: StorageBackend>(
    inventory: &mut Inventory<B>,
    records: Vec<ItemRecord>,
) -> Result<IngestReport> {
    let existing = inventory.all_items();
    let index = DuplicateIndex::build(existing.iter());

    let mut outcomes = Vec::with_capacity(records.len());
    let mut duplicates = Vec::new();
    let mut accepted: Vec<Item> = Vec::new();

    for record in records {
        if let Some(reason) = index.check(&record) {
            duplicates.push(DuplicateRecord {
                item: record.clone(),
                reason,
            });
            outcomes.push(RecordOutcome {
                item: record,
                status: RecordStatus::Duplicate { reason },
            });
            continue;
        }

        accepted.push(Item::from(record.clone()));
        outcomes.push(RecordOutcome {
            item: record,
            status: RecordStatus::Stored,
        });
    }

    let total_processed = accepted.len();
    let mut fruits_count = 0;
    let mut vegetables_count = 0;

    for category in Category::ALL {
        let batch: Vec<Item> = accepted
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect();
        match category {
            Category::Fruit => fruits_count = batch.len(),
            Category::Vegetable => vegetables_count = batch.len(),
        }
        inventory.collection_mut(category).extend(batch)?;
    }

    let superset = inventory.all_items();
    inventory.store().save_all(&superset)?;

    log::info!(
        "Ingested {} items ({} fruits, {} vegetables, {} duplicates) into {}",
        total_processed,
        fruits_count,
        vegetables_count,
        duplicates.len(),
        inventory.store().location()
    );

    Ok(IngestReport {
        fruits_count,
        vegetables_count,
        total_processed,
        outcomes,
        duplicates,
        message: SUCCESS_MESSAGE.to_string(),
    })
}
