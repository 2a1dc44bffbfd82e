mod cli;
mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::{import, models, search, serve, stats};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;
    let data_dir = cli.data_dir;
    let config = context::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Import(cmd) => import::run(cmd, &data_dir, format),
        Command::Search(cmd) => search::run(cmd, &data_dir, &config, format),
        Command::Models(cmd) => models::run(cmd, &data_dir, &config, format),
        Command::Stats => stats::run(&data_dir, format),
        Command::Serve(cmd) => serve::run(cmd, &data_dir, config).await,
    }
}
