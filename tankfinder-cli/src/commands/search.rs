use std::path::Path;

use anyhow::Result;
use tankfinder::SearchParams;

use crate::cli::SearchCommand;
use crate::context::{self, AppConfig};
use crate::output::{self, OutputFormat};

/// Execute a search command.
pub fn run(cmd: SearchCommand, data_dir: &Path, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let engine = context::open_engine(data_dir, config)?;

    // Values stay strings so the engine applies the same validation as the HTTP API.
    let params = SearchParams {
        tank_type: cmd.tank_type,
        model: cmd.model,
        diameter: cmd.diameter,
        height: cmd.height,
        capacity: cmd.capacity,
    };
    let response = engine.search(&params)?;
    output::print_search_response(&response, format)
}
