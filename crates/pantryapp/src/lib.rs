//! # Pantry Architecture
//!
//! Pantry is a **UI-agnostic produce inventory library**. It ingests batches of
//! fruit and vegetable records, rejects duplicates, persists everything to one
//! CSV file and answers filtered, unit-converted queries. The `pantry` binary is
//! just one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (pantry crate)                                   │
//! │  - Parses arguments, validates raw input, renders output    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Loads a fresh Inventory for every operation              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Duplicate detection, merging, filtering                  │
//! │  - Operates on Collections, returns structured reports      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Inventory / Collection (inventory.rs, collection.rs)       │
//! │  - One in-memory view per category over a shared store      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ItemStore: merge policy (save / save_all)                │
//! │  - StorageBackend: CsvBackend (production), MemBackend      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types and never writes to stdout/stderr. Duplicates are reported as
//! outcomes; only whole-operation failures come back as `Err`.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: thorough unit tests against `MemBackend`.
//! 2. **Store**: unit tests per backend, plus `tests/` against real files.
//! 3. **API**: dispatch and fresh-state tests.
//! 4. **CLI**: argument parsing, rendering and end-to-end runs in the binary crate.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Ingest, query and add logic
//! - [`inventory`]: Per-operation pair of category collections
//! - [`collection`]: Category-scoped in-memory view
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Item`, `ItemRecord`, `Category`, `Unit`
//! - [`validation`]: Field rules for caller-supplied records
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod store;
pub mod validation;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
