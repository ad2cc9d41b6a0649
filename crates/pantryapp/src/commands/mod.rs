//! # Command Layer
//!
//! This module contains the **core business logic** of pantry. Each command lives in its
//! own submodule and implements pure Rust functions over an [`Inventory`](crate::inventory::Inventory).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Duplicate detection against the loaded state
//! - Partitioning accepted items by category
//! - Choosing the right write primitive (`save` vs `save_all`)
//! - Returning structured reports, never strings
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: No stdout, stderr or formatting
//! - **Field validation**: Records arrive as validated [`ItemRecord`](crate::model::ItemRecord)s
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! Duplicates are outcomes, not errors. Only whole-operation failures (I/O)
//! come back as `Err`.
//!
//! ## Testing Strategy
//!
//! Command tests use `MemBackend` to avoid filesystem dependencies and cover
//! every branch of the duplicate and merge logic.
//!
//! ## Command Modules
//!
//! - [`ingest`]: Batch ingestion with one consolidated write
//! - [`query`]: Filtered, unit-converted listing
//! - [`add`]: Single-item add with a category-scoped write
//! - [`helpers`]: Duplicate index and reasons

pub mod add;
pub mod helpers;
pub mod ingest;
pub mod query;

pub use add::AddOutcome;
pub use helpers::{DuplicateIndex, DuplicateReason};
pub use ingest::{DuplicateRecord, IngestReport, RecordOutcome, RecordStatus};
pub use query::{ItemFilter, ItemListing};
