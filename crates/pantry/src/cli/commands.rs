//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Initializes logging
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve configuration, open the store
//! 3. **Validation**: Turn raw input into `ItemRecord`s via `pantryapp::validation`
//! 4. **Dispatch**: Call the matching `PantryApi` method
//! 5. **Output Formatting**: Render text or JSON through `render`

use super::render;
use super::setup::{AddArgs, Cli, Commands, ListArgs, OutputFormat};
use anyhow::{bail, Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use pantryapp::api::PantryApi;
use pantryapp::commands::{AddOutcome, ItemFilter};
use pantryapp::config::{PantryConfig, CONFIG_FILE_NAME};
use pantryapp::store::StorageBackend;
use pantryapp::validation::{self, RawItem};
use std::fs;
use std::path::{Path, PathBuf};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let store_path = cli.store.clone().unwrap_or_else(|| config.storage_path());
    log::debug!("Using store {}", store_path.display());

    let mut api = PantryApi::open(&store_path)
        .with_context(|| format!("failed to open store {}", store_path.display()))?;

    let output = dispatch(&mut api, &cli.command, cli.output, &config)?;
    print!("{}", output);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Config files searched when `--config` is not given, highest priority first.
fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dirs) = ProjectDirs::from("com", "pantry", "pantry") {
        paths.push(dirs.config_dir().join(CONFIG_FILE_NAME));
    }
    paths
}

fn load_config(explicit: Option<&Path>) -> Result<PantryConfig> {
    let files = match explicit {
        Some(path) => {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            vec![path.to_path_buf()]
        }
        None => config_search_paths(),
    };
    PantryConfig::load(&files).context("failed to load configuration")
}

/// Runs one command against `api` and returns the rendered output.
pub fn dispatch<B: StorageBackend>(
    api: &mut PantryApi<B>,
    command: &Commands,
    format: OutputFormat,
    config: &PantryConfig,
) -> Result<String> {
    match command {
        Commands::Process { file } => handle_process(api, file, format),
        Commands::List(args) => handle_list(api, args, format, config),
        Commands::Add(args) => handle_add(api, args, format),
    }
}

fn handle_process<B: StorageBackend>(
    api: &mut PantryApi<B>,
    file: &Path,
    format: OutputFormat,
) -> Result<String> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("failed to read request file {}", file.display()))?;
    let raws: Vec<RawItem> = serde_json::from_str(&content)
        .with_context(|| format!("invalid JSON in {}", file.display()))?;

    let records = validation::validate_batch(&raws)?;
    let report = api.ingest(records)?;
    Ok(render::ingest(&report, format)?)
}

fn handle_list<B: StorageBackend>(
    api: &PantryApi<B>,
    args: &ListArgs,
    format: OutputFormat,
    config: &PantryConfig,
) -> Result<String> {
    let unit = match args.unit {
        Some(unit) => unit,
        None => config.default_unit()?,
    };
    let filter = ItemFilter {
        name: args.name.clone(),
        min_quantity: args.min_quantity,
        max_quantity: args.max_quantity,
    };

    let listing = api.query(args.category, &filter, unit)?;
    Ok(render::listing(&listing, format)?)
}

fn handle_add<B: StorageBackend>(
    api: &mut PantryApi<B>,
    args: &AddArgs,
    format: OutputFormat,
) -> Result<String> {
    let raw = RawItem {
        id: args.id,
        name: args.name.clone(),
        category: args.category.clone(),
        quantity: args.quantity,
        unit: args.unit.clone(),
    };
    let record = validation::validate_item(&raw)?;

    let outcome = api.add_one(record)?;
    if let AddOutcome::Duplicate { reason } = &outcome {
        bail!("{}", reason);
    }
    Ok(render::added(&outcome, format)?)
}
