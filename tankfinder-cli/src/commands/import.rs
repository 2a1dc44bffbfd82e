use std::path::Path;

use anyhow::{Context, Result};
use tankfinder::{TankType, import_csv_file};

use crate::cli::ImportCommand;
use crate::context;
use crate::output::{self, OutputFormat};

/// Execute an import command and persist the updated catalog.
pub fn run(cmd: ImportCommand, data_dir: &Path, format: OutputFormat) -> Result<()> {
    let tank_type: TankType = cmd.tank_type.parse()?;
    let store = context::open_store(data_dir)?;

    let summary = import_csv_file(&store, tank_type, &cmd.file)
        .with_context(|| format!("Failed to import {}", cmd.file.display()))?;
    context::save_store(&store, data_dir)?;

    output::print_import_summary(&summary, format)
}
