use std::path::Path;

use anyhow::Result;

use crate::cli::ServeCommand;
use crate::context::{self, AppConfig};

/// Serve the catalog over HTTP until interrupted.
pub async fn run(cmd: ServeCommand, data_dir: &Path, config: AppConfig) -> Result<()> {
    let engine = context::open_engine(data_dir, &config)?;
    let mut server_config = config.server;
    if let Some(addr) = cmd.addr {
        server_config.addr = addr;
    }
    tankfinder_server::serve(&server_config, engine).await
}
