use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Tankfinder - storage tank catalog search CLI
#[derive(Parser)]
#[command(name = "tankfinder", version, about)]
pub struct Cli {
    /// Path to the data directory holding the catalog snapshot.
    #[arg(long, env = "TANKFINDER_DATA_DIR", default_value = "./tankfinder_data")]
    pub data_dir: PathBuf,

    /// Path to a TOML file with `[search]` and `[server]` tables.
    #[arg(long, env = "TANKFINDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import tanks and capacities from a CSV file.
    Import(ImportCommand),
    /// Search the catalog.
    Search(SearchCommand),
    /// List model names for autocomplete.
    Models(ModelsCommand),
    /// Show catalog statistics.
    Stats,
    /// Start the HTTP server.
    Serve(ServeCommand),
}

// --- Import ---

#[derive(Args)]
pub struct ImportCommand {
    /// Tank type of every row in the file (RCT, SST or FM).
    #[arg(long = "type")]
    pub tank_type: String,

    /// CSV file with model, diameter, height and capacity columns.
    #[arg(long)]
    pub file: PathBuf,
}

// --- Search ---

/// Criteria are applied in priority order: model, diameter with height,
/// capacity, diameter alone, height alone.
#[derive(Args)]
pub struct SearchCommand {
    /// Tank type (RCT, SST or FM).
    #[arg(long = "type")]
    pub tank_type: Option<String>,

    /// Model name substring.
    #[arg(long)]
    pub model: Option<String>,

    /// Diameter in metres.
    #[arg(long)]
    pub diameter: Option<String>,

    /// Height in metres.
    #[arg(long)]
    pub height: Option<String>,

    /// Required capacity in kilolitres.
    #[arg(long)]
    pub capacity: Option<String>,
}

// --- Models ---

#[derive(Args)]
pub struct ModelsCommand {
    /// Tank type (RCT, SST or FM).
    #[arg(long = "type")]
    pub tank_type: Option<String>,

    /// Case-insensitive model name filter.
    #[arg(long)]
    pub query: Option<String>,
}

// --- Serve ---

#[derive(Args)]
pub struct ServeCommand {
    /// Listen address; overrides `[server] addr` from the config file.
    #[arg(long)]
    pub addr: Option<String>,
}
