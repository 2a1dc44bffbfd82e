//! Search engine facade.
//!
//! [`SearchEngine`] turns raw request parameters into a [`SearchRequest`],
//! dispatches it to the matching mode handler and wraps the rows in a
//! [`SearchResponse`]. It only reads from the store.

pub mod config;
pub mod modes;
pub mod query;
pub mod rank;
pub mod search;

use std::sync::Arc;

use crate::data::TankType;
use crate::error::Result;
use crate::store::RecordStore;

use self::config::SearchConfig;
use self::query::{SearchMode, SearchParams, SearchRequest};
use self::search::{ModelSummary, ModelsResponse, SearchResponse};

/// Catalog search over a shared [`RecordStore`].
pub struct SearchEngine {
    store: Arc<dyn RecordStore>,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine with the default tolerances and limits.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_config(store, SearchConfig::default())
    }

    pub fn with_config(store: Arc<dyn RecordStore>, config: SearchConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Validate `params` and run the search they select.
    ///
    /// Returns a [`TankError::Validation`](crate::error::TankError::Validation)
    /// when the tank type is missing, no criterion is given, or the numbers
    /// of the selected mode do not parse.
    pub fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
        let request = SearchRequest::parse(params)?;
        self.execute(&request)
    }

    /// Run an already validated request.
    pub fn execute(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let store = self.store.as_ref();
        let tank_type = request.tank_type;
        log::debug!("{} search on {}", request.mode.name(), tank_type);

        let (results, info) = match &request.mode {
            SearchMode::Model { query } => modes::model::search(store, tank_type, query)?,
            SearchMode::Dimensions { diameter, height } => {
                modes::dimension::search(store, &self.config, tank_type, *diameter, *height)?
            }
            SearchMode::Capacity { capacity_kl } => {
                modes::capacity::search(store, &self.config, tank_type, *capacity_kl)?
            }
            SearchMode::Diameter { diameter } => {
                modes::diameter::search(store, &self.config, tank_type, *diameter)?
            }
            SearchMode::Height { height } => {
                modes::height::search(store, &self.config, tank_type, *height)?
            }
        };

        log::debug!("{} search returned {} rows", request.mode.name(), results.len());
        Ok(SearchResponse::new(results, info))
    }

    /// Model names of a category for autocomplete, alphabetically.
    ///
    /// A missing or unrecognised tank type yields an empty answer rather than
    /// an error. `query` filters by case-insensitive substring when non-empty.
    pub fn models(&self, tank_type: Option<&str>, query: Option<&str>) -> Result<ModelsResponse> {
        let Some(tank_type) = tank_type.and_then(|t| t.parse::<TankType>().ok()) else {
            return Ok(ModelsResponse::default());
        };
        let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();

        let mut models = Vec::new();
        for tank in self.store.filter_by_type(tank_type)? {
            if !needle.is_empty() && !tank.model.to_lowercase().contains(&needle) {
                continue;
            }
            let capacity_count = self.store.capacities_of(&tank)?.len();
            models.push(ModelSummary {
                model: tank.model,
                diameter: tank.diameter,
                capacity_count,
                tank_type,
            });
        }
        Ok(ModelsResponse::new(models))
    }
}
