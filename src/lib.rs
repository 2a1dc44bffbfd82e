//! # Tankfinder
//!
//! Catalog lookup for water storage tanks. Given a tank category and one
//! search criterion it returns the closest matching tank and height
//! variants from an in-memory catalog.
//!
//! ## Features
//!
//! - Five search modes: model name, diameter and height, capacity, diameter
//!   only and height only
//! - Category-specific units, naming and capacity windows
//! - Model autocomplete
//! - JSON snapshots and CSV bulk import
// Core modules
pub mod data;
pub mod engine;
pub mod error;
pub mod store;
pub mod util;

// Re-exports for the public API
pub use data::{Capacity, CatalogEntry, Tank, TankId, TankType};
pub use engine::SearchEngine;
pub use engine::config::SearchConfig;
pub use engine::query::{SearchMode, SearchParams, SearchRequest};
pub use engine::search::{
    MatchLabel, MatchType, ModelSummary, ModelsResponse, ResultRecord, SearchInfo, SearchResponse,
};
pub use error::{Result, TankError};
pub use store::loader::{ImportSummary, import_csv, import_csv_file};
pub use store::memory::MemoryStore;
pub use store::{CatalogStats, RecordStore, TypeStats};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
