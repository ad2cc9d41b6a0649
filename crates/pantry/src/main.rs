//! # Pantry CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/pantry/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Config resolution, validation, dispatch (commands.rs)    │
//! │  - Text and JSON rendering (render.rs)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/pantryapp/src/api.rs)                    │
//! │  - Loads a fresh Inventory per operation                    │
//! │  - Returns structured reports                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns argument
//! parsing, logging setup, input validation, rendering and exit codes.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to the code, integration tests against real
//!   CSV files.
//! - **CLI (`src/cli/`)**: parsing tests over `clap` argument vectors and
//!   rendering tests over canned reports.
//! - **End to end (`tests/`)**: `assert_cmd` runs of the built binary.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
