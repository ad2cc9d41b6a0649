use super::helpers::{DuplicateIndex, DuplicateReason};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::{Item, ItemRecord};
use crate::store::StorageBackend;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AddOutcome {
    Success { item: Item },
    Duplicate { reason: DuplicateReason },
}

impl AddOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AddOutcome::Success { .. })
    }
}

/// Single-item add.
///
/// Runs the batch duplicate check against the full current state. On success
/// only the record's own category is touched, so it persists through that
/// collection's category-scoped save.
pub fn run<B: StorageBackend>(
    inventory: &mut Inventory<B>,
    record: ItemRecord,
) -> Result<AddOutcome> {
    let existing = inventory.all_items();
    if let Some(reason) = DuplicateIndex::build(existing.iter()).check(&record) {
        log::info!("Rejected item {} ({}): {}", record.id, record.name, reason);
        return Ok(AddOutcome::Duplicate { reason });
    }

    let item = Item::from(record);
    let collection = inventory.collection_mut(item.category);
    collection.add(item.clone())?;
    collection.save()?;

    log::info!(
        "Added {} item {} ({}) to {}",
        item.category,
        item.id,
        item.name,
        inventory.store().location()
    );
    Ok(AddOutcome::Success { item })
}
