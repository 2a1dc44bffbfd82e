use serde::{Deserialize, Serialize};

/// Tolerances, weights and result limits for every search mode.
///
/// Every field has a default, so a partial TOML `[search]` table only needs
/// the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Dimension search: first diameter window, as a fraction of the target.
    pub dimension_tolerance: f64,
    /// Dimension search: wider window tried when the first one is empty.
    pub dimension_fallback_tolerance: f64,
    /// Dimension search: nearest diameters kept when both windows are empty.
    pub dimension_nearest_fallback: usize,
    /// Weight of the diameter delta in the dimension score.
    pub diameter_weight: f64,
    /// Weight of the height delta in the dimension score.
    pub height_weight: f64,
    /// Result cap for dimension and capacity searches.
    pub ranked_limit: usize,

    /// Capacity search (RCT/SST): kilolitres below the target still admitted.
    pub capacity_lower_margin: f64,
    /// Capacity search (RCT/SST): kilolitres above the target still admitted.
    pub capacity_upper_margin: f64,
    /// Capacity search: differences below this are labelled "Exact Match".
    pub exact_match_threshold: f64,

    /// Diameter-only search: diameter window, as a fraction of the target.
    pub diameter_tolerance: f64,
    /// Diameter-only search: nearest diameters kept when the window is empty.
    pub diameter_nearest_fallback: usize,
    /// Height-only search: half-width of the range used when the type has no heights.
    pub height_window: f64,
    /// Result cap for diameter-only and height-only searches.
    pub listing_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            dimension_tolerance: 0.15,
            dimension_fallback_tolerance: 0.25,
            dimension_nearest_fallback: 3,
            diameter_weight: 2.0,
            height_weight: 2.0,
            ranked_limit: 15,
            capacity_lower_margin: 4.0,
            capacity_upper_margin: 40.0,
            exact_match_threshold: 2.0,
            diameter_tolerance: 0.20,
            diameter_nearest_fallback: 5,
            height_window: 0.5,
            listing_limit: 20,
        }
    }
}
