//! Search request parsing and mode selection.
//!
//! Raw request parameters arrive as optional strings (HTTP query values or
//! CLI flags). [`SearchRequest::parse`] validates them and resolves exactly
//! one [`SearchMode`] using a fixed priority chain:
//!
//! 1. `model` non-empty: [`SearchMode::Model`]
//! 2. `diameter` and `height`: [`SearchMode::Dimensions`]
//! 3. `capacity`: [`SearchMode::Capacity`]
//! 4. `diameter` alone: [`SearchMode::Diameter`]
//! 5. `height` alone: [`SearchMode::Height`]
//!
//! Only the parameters consumed by the selected mode are parsed as numbers,
//! so a stray value in a lower-priority field never fails a request.

use serde::{Deserialize, Serialize};

use crate::data::TankType;
use crate::error::{Result, TankError};

/// Raw, unvalidated search parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub tank_type: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub diameter: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub capacity: Option<String>,
}

impl SearchParams {
    pub fn new(tank_type: impl Into<String>) -> Self {
        Self {
            tank_type: Some(tank_type.into()),
            ..Default::default()
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn diameter(mut self, diameter: impl Into<String>) -> Self {
        self.diameter = Some(diameter.into());
        self
    }

    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn capacity(mut self, capacity: impl Into<String>) -> Self {
        self.capacity = Some(capacity.into());
        self
    }
}

/// The search strategy selected for a request. Values are as supplied by
/// the caller; each mode applies its own rounding.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchMode {
    /// Case-insensitive substring match on model name.
    Model { query: String },
    /// Nearest match on diameter and height, scored against cylinder volume.
    Dimensions { diameter: f64, height: f64 },
    /// Nearest match on capacity in kilolitres.
    Capacity { capacity_kl: f64 },
    /// Tanks with a diameter close to the target.
    Diameter { diameter: f64 },
    /// Capacities at the height closest to the target.
    Height { height: f64 },
}

impl SearchMode {
    pub fn name(&self) -> &'static str {
        match self {
            SearchMode::Model { .. } => "model",
            SearchMode::Dimensions { .. } => "dimensions",
            SearchMode::Capacity { .. } => "capacity",
            SearchMode::Diameter { .. } => "diameter",
            SearchMode::Height { .. } => "height",
        }
    }
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub tank_type: TankType,
    pub mode: SearchMode,
}

impl SearchRequest {
    pub fn new(tank_type: TankType, mode: SearchMode) -> Self {
        Self { tank_type, mode }
    }

    /// Validate raw parameters and select the search mode.
    pub fn parse(params: &SearchParams) -> Result<Self> {
        let tank_type: TankType = present(&params.tank_type)
            .ok_or_else(|| TankError::validation("Please select a tank type first"))?
            .parse()?;

        let model = present(&params.model);
        let diameter = present(&params.diameter);
        let height = present(&params.height);
        let capacity = present(&params.capacity);

        let mode = if let Some(query) = model {
            SearchMode::Model {
                query: query.to_string(),
            }
        } else if let (Some(d), Some(h)) = (diameter, height) {
            SearchMode::Dimensions {
                diameter: parse_number(d, "Invalid dimension values")?,
                height: parse_number(h, "Invalid dimension values")?,
            }
        } else if let Some(c) = capacity {
            SearchMode::Capacity {
                capacity_kl: parse_number(c, "Invalid capacity value")?,
            }
        } else if let Some(d) = diameter {
            SearchMode::Diameter {
                diameter: parse_number(d, "Invalid diameter value")?,
            }
        } else if let Some(h) = height {
            SearchMode::Height {
                height: parse_number(h, "Invalid height value")?,
            }
        } else {
            return Err(TankError::validation(
                "Please enter at least one search parameter",
            ));
        };

        Ok(Self { tank_type, mode })
    }
}

/// A parameter counts as present when it has non-whitespace content.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_number(raw: &str, message: &str) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TankError::validation(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_of(params: SearchParams) -> SearchMode {
        SearchRequest::parse(&params).unwrap().mode
    }

    fn error_of(params: SearchParams) -> String {
        let err = SearchRequest::parse(&params).unwrap_err();
        assert!(err.is_validation());
        err.to_string()
    }

    #[test]
    fn test_missing_tank_type() {
        let params = SearchParams {
            model: Some("R10".to_string()),
            ..Default::default()
        };
        assert_eq!(error_of(params), "Please select a tank type first");
        assert_eq!(
            error_of(SearchParams::new("  ").model("R10")),
            "Please select a tank type first"
        );
    }

    #[test]
    fn test_unknown_tank_type() {
        assert!(error_of(SearchParams::new("XL").model("R10")).contains("Unknown tank type"));
    }

    #[test]
    fn test_no_criteria() {
        for tank_type in TankType::ALL {
            assert_eq!(
                error_of(SearchParams::new(tank_type.code())),
                "Please enter at least one search parameter"
            );
        }
        assert_eq!(
            error_of(SearchParams::new("RCT").model("   ").capacity("")),
            "Please enter at least one search parameter"
        );
    }

    #[test]
    fn test_model_wins_over_everything() {
        let params = SearchParams::new("RCT")
            .model(" r10 ")
            .diameter("3")
            .height("2")
            .capacity("50");
        assert_eq!(
            mode_of(params),
            SearchMode::Model {
                query: "r10".to_string()
            }
        );
    }

    #[test]
    fn test_dimensions_win_over_capacity() {
        let params = SearchParams::new("RCT")
            .diameter("3.0")
            .height("2.0")
            .capacity("50");
        assert_eq!(
            mode_of(params),
            SearchMode::Dimensions {
                diameter: 3.0,
                height: 2.0
            }
        );
    }

    #[test]
    fn test_capacity_wins_over_single_dimension() {
        let params = SearchParams::new("SST").diameter("3.0").capacity("50");
        assert_eq!(mode_of(params), SearchMode::Capacity { capacity_kl: 50.0 });
    }

    #[test]
    fn test_single_dimension_modes() {
        assert_eq!(
            mode_of(SearchParams::new("FM").diameter("4.25")),
            SearchMode::Diameter { diameter: 4.25 }
        );
        assert_eq!(
            mode_of(SearchParams::new("FM").height("1.5")),
            SearchMode::Height { height: 1.5 }
        );
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(
            error_of(SearchParams::new("RCT").diameter("3").height("tall")),
            "Invalid dimension values"
        );
        assert_eq!(
            error_of(SearchParams::new("RCT").capacity("lots")),
            "Invalid capacity value"
        );
        assert_eq!(
            error_of(SearchParams::new("RCT").diameter("NaN")),
            "Invalid diameter value"
        );
        assert_eq!(
            error_of(SearchParams::new("RCT").height("inf")),
            "Invalid height value"
        );
    }

    #[test]
    fn test_unused_parameters_are_not_parsed() {
        let params = SearchParams::new("RCT").model("R10").capacity("lots");
        assert_eq!(mode_of(params).name(), "model");
    }
}
