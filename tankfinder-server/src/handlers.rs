use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::{Value, json};
use tankfinder::{ModelsResponse, SearchParams, SearchResponse};

use crate::AppState;
use crate::error::ApiError;

/// Query string of `GET /api/models/`.
#[derive(Debug, Default, Deserialize)]
pub struct ModelsQuery {
    pub tank_type: Option<String>,
    pub q: Option<String>,
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    tracing::debug!(?params, "search request");
    let response = state.engine.search(&params)?;
    Ok(Json(response))
}

pub async fn models(
    State(state): State<AppState>,
    Query(query): Query<ModelsQuery>,
) -> Result<Json<ModelsResponse>, ApiError> {
    let response = state
        .engine
        .models(query.tank_type.as_deref(), query.q.as_deref())?;
    Ok(Json(response))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
