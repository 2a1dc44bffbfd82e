use std::path::Path;

use anyhow::Result;

use crate::cli::ModelsCommand;
use crate::context::{self, AppConfig};
use crate::output::{self, OutputFormat};

/// List models of a tank type, optionally filtered.
pub fn run(cmd: ModelsCommand, data_dir: &Path, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let engine = context::open_engine(data_dir, config)?;
    let response = engine.models(cmd.tank_type.as_deref(), cmd.query.as_deref())?;
    output::print_models(&response, format)
}
