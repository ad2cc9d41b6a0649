//! # CLI Behavior
//!
//! This is **one possible UI client** for pantry, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ## Commands
//!
//! - `pantry process [FILE]`: ingest a JSON array of items (default `request.json`)
//! - `pantry list`: filtered listing, converted to the requested unit
//! - `pantry add`: add a single item; a duplicate exits with status 1
//!
//! Every command renders as text by default, or as JSON with `--output json`.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Config resolution, validation and dispatch to the API
//! - `render`: Text tables and JSON output

mod commands;
mod render;
pub mod setup;

pub use commands::run;
