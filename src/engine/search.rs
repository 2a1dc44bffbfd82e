//! Search output: formatted result rows, per-mode metadata and autocomplete entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::{CatalogEntry, TankType};

/// How a dimension-search row relates to the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Approximate,
}

/// Match quality of an RCT/SST capacity-search row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLabel {
    #[serde(rename = "Exact Match")]
    ExactMatch,
    #[serde(rename = "Higher Capacity Option")]
    HigherCapacityOption,
    #[serde(rename = "Closest Match")]
    ClosestMatch,
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchLabel::ExactMatch => "Exact Match",
            MatchLabel::HigherCapacityOption => "Higher Capacity Option",
            MatchLabel::ClosestMatch => "Closest Match",
        })
    }
}

/// One tank/capacity row as returned by every search mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub tank_type: TankType,
    pub tank_type_name: String,
    /// Sales-facing name including the height suffix.
    pub model: String,
    /// Model name as stored.
    pub base_model: String,
    pub diameter: f64,
    pub height: f64,
    pub capacity: f64,
    pub capacity_kl: f64,
    pub capacity_display: String,
    pub capacity_kl_display: String,
    pub capacity_unit: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<MatchType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter_diff: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_diff: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_difference: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_label: Option<MatchLabel>,
}

impl From<&CatalogEntry> for ResultRecord {
    fn from(entry: &CatalogEntry) -> Self {
        let tank_type = entry.tank.tank_type;
        Self {
            tank_type,
            tank_type_name: tank_type.label().to_string(),
            model: entry.display_model_name(),
            base_model: entry.tank.model.clone(),
            diameter: entry.tank.diameter,
            height: entry.capacity.height,
            capacity: entry.capacity.capacity,
            capacity_kl: entry.capacity_kl(),
            capacity_display: entry.capacity_display(),
            capacity_kl_display: entry.capacity_kl_display(),
            capacity_unit: entry.capacity_unit().to_string(),
            match_type: None,
            diameter_diff: None,
            height_diff: None,
            match_difference: None,
            match_label: None,
        }
    }
}

/// Mode-specific metadata describing how a search was interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "search_type", rename_all = "lowercase")]
pub enum SearchInfo {
    Model {
        query: String,
    },
    Dimensions {
        /// Requested cylinder volume in m³, rounded to 2 decimals.
        calculated_volume: f64,
        diameter: f64,
        height: f64,
    },
    Capacity {
        capacity_kl: f64,
        /// `None` for FM, which has no capacity window.
        lower_bound: Option<f64>,
        upper_bound: Option<f64>,
    },
    Diameter {
        diameter: f64,
    },
    Height {
        height: f64,
    },
}

/// Complete answer to a search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ResultRecord>,
    pub search_info: SearchInfo,
    pub count: usize,
}

impl SearchResponse {
    pub fn new(results: Vec<ResultRecord>, search_info: SearchInfo) -> Self {
        let count = results.len();
        Self {
            results,
            search_info,
            count,
        }
    }
}

/// Autocomplete entry for one tank model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub model: String,
    pub diameter: f64,
    pub capacity_count: usize,
    pub tank_type: TankType,
}

/// Autocomplete answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelSummary>,
    pub count: usize,
}

impl ModelsResponse {
    pub fn new(models: Vec<ModelSummary>) -> Self {
        let count = models.len();
        Self { models, count }
    }
}
