//! # Storage Layer
//!
//! This module defines how the full item set is persisted. It is split in two,
//! the same way raw I/O and storage policy are split everywhere in pantry:
//!
//! - [`backend::StorageBackend`]: the "how". Load every row, overwrite every row.
//!   No business rules.
//! - [`item_store::ItemStore`]: the "what". Header initialization, the
//!   category-scoped `save` and the unconditional `save_all`.
//!
//! ## Write Primitives
//!
//! - `save(batch)`: re-reads the store, drops every item whose category equals
//!   `batch[0].category`, appends the batch, writes the result. Safe only when a
//!   single category is being touched.
//! - `save_all(all)`: writes exactly `all`. Ingestion assembles the superset of
//!   every category in memory and calls this once, so a multi-category batch
//!   never goes through two sequential category-scoped read/write cycles.
//!
//! Both rewrite the whole file. Nothing is patched in place, and nothing is
//! normalized at rest: each row's quantity is expressed in its own unit.
//!
//! ## Implementations
//!
//! - [`csv_backend::CsvBackend`]: production CSV file with atomic tmp-then-rename writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! id,name,category,quantity,unit
//! 1,Apples,fruit,1000,g
//! 2,"Onion, red",vegetable,1.5,kg
//! ```
//!
//! Rows with fewer than five fields, or with fields that do not decode, are
//! skipped on read rather than failing the whole load.

pub mod backend;
pub mod csv_backend;
pub mod item_store;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use csv_backend::CsvBackend;
pub use item_store::ItemStore;
pub use mem_backend::MemBackend;
