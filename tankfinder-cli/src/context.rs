use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tankfinder::{MemoryStore, SearchConfig, SearchEngine};
use tankfinder_server::ServerConfig;

const CATALOG_FILE: &str = "catalog.json";

/// Contents of the optional `--config` TOML file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub server: ServerConfig,
}

/// Load the config file, or the defaults when none was given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: AppConfig = toml::from_str(&content).context("Failed to parse config TOML")?;
    Ok(config)
}

pub fn catalog_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CATALOG_FILE)
}

/// Open the catalog snapshot in `data_dir`. A missing snapshot is an empty catalog.
pub fn open_store(data_dir: &Path) -> Result<MemoryStore> {
    let path = catalog_path(data_dir);
    MemoryStore::open(&path).with_context(|| format!("Failed to open catalog {}", path.display()))
}

pub fn save_store(store: &MemoryStore, data_dir: &Path) -> Result<()> {
    let path = catalog_path(data_dir);
    store
        .save(&path)
        .with_context(|| format!("Failed to save catalog {}", path.display()))
}

/// Open the catalog and wrap it in a search engine.
pub fn open_engine(data_dir: &Path, config: &AppConfig) -> Result<Arc<SearchEngine>> {
    let store = open_store(data_dir)?;
    Ok(Arc::new(SearchEngine::with_config(
        Arc::new(store),
        config.search.clone(),
    )))
}
