use clap::{Args, Parser, Subcommand, ValueEnum};
use pantryapp::model::{Category, Unit};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "pantry", bin_name = "pantry", version)]
#[command(about = "Produce inventory: ingest, list and add fruits and vegetables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// CSV store file (overrides config and PANTRY_STORAGE_FILE)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub store: Option<PathBuf>,

    /// Config file to load instead of the default search path
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text, help_heading = "Options")]
    pub output: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest a JSON array of items
    Process {
        /// Request file
        #[arg(default_value = "request.json")]
        file: PathBuf,
    },

    /// List stored items
    #[command(alias = "ls")]
    List(ListArgs),

    /// Add a single item
    Add(AddArgs),
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only list this category (fruit or vegetable)
    #[arg(long = "type", value_name = "TYPE")]
    pub category: Option<Category>,

    /// Case-insensitive name substring
    #[arg(long)]
    pub name: Option<String>,

    /// Inclusive lower bound, in the display unit
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub min_quantity: Option<f64>,

    /// Inclusive upper bound, in the display unit
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_quantity: Option<f64>,

    /// Display unit (g or kg); defaults to the configured unit
    #[arg(long)]
    pub unit: Option<Unit>,
}

/// Raw add flags. Field rules are applied by `pantryapp::validation`.
#[derive(Args, Debug, Default)]
pub struct AddArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub id: Option<i64>,

    #[arg(long)]
    pub name: Option<String>,

    /// fruit or vegetable
    #[arg(long = "type", value_name = "TYPE")]
    pub category: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub quantity: Option<f64>,

    /// g, kg, grams or kilograms
    #[arg(long)]
    pub unit: Option<String>,
}
