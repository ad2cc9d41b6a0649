use crate::error::Result;
use crate::model::Item;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (CSV file vs memory),
/// while ItemStore handles the "what" (category-scoped merge, consolidated writes).
pub trait StorageBackend {
    /// Load every persisted item in storage order.
    /// Returns Ok(empty) if nothing has been persisted yet.
    /// Rows that cannot be decoded are skipped, not reported.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn load_items(&self) -> Result<Vec<Item>>;

    /// Replace the entire persisted set with `items`.
    /// MUST be atomic (e.g. write to tmp then rename): on failure the previous
    /// contents are left intact.
    fn write_items(&self, items: &[Item]) -> Result<()>;

    /// Whether storage holds at least a header (file present and non-empty).
    fn is_initialized(&self) -> bool;

    /// Human-readable location, used in log lines.
    fn location(&self) -> String;
}
