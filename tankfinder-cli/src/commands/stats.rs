use std::path::Path;

use anyhow::Result;

use crate::context;
use crate::output::{self, OutputFormat};

pub fn run(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let store = context::open_store(data_dir)?;
    output::print_stats(&store.stats(), format)
}
