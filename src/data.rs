//! Catalog records: tanks, their capacity variants, and the values derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TankError};
use crate::util::format::format_grouped;
use crate::util::numeric::height_code;

/// Tank category. Each category has its own storage unit and naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TankType {
    #[serde(rename = "RCT")]
    Rct,
    #[serde(rename = "SST")]
    Sst,
    #[serde(rename = "FM")]
    Fm,
}

impl TankType {
    pub const ALL: [TankType; 3] = [TankType::Rct, TankType::Sst, TankType::Fm];

    /// Short code used in requests and CSV imports.
    pub fn code(self) -> &'static str {
        match self {
            TankType::Rct => "RCT",
            TankType::Sst => "SST",
            TankType::Fm => "FM",
        }
    }

    /// Human-readable category name.
    pub fn label(self) -> &'static str {
        match self {
            TankType::Rct => "Rhino Commercial Tank",
            TankType::Sst => "SecureStore Micro-Coated Tanks",
            TankType::Fm => "Factory Mutual Tank",
        }
    }

    /// Unit the raw capacity value is stored in.
    pub fn capacity_unit(self) -> &'static str {
        match self {
            TankType::Sst => "m³",
            TankType::Rct | TankType::Fm => "Litres",
        }
    }

    /// Long form of [`capacity_unit`](Self::capacity_unit).
    pub fn capacity_unit_description(self) -> &'static str {
        match self {
            TankType::Sst => "Cubic Meters (m³)",
            TankType::Rct | TankType::Fm => "Litres (L)",
        }
    }

    /// Convert a raw stored capacity to kilolitres.
    pub fn to_kl(self, raw_capacity: f64) -> f64 {
        match self {
            TankType::Sst => raw_capacity,
            TankType::Rct | TankType::Fm => raw_capacity / 1000.0,
        }
    }

    /// Whether capacity searches for this category use the asymmetric window.
    pub fn uses_capacity_window(self) -> bool {
        matches!(self, TankType::Rct | TankType::Sst)
    }
}

impl fmt::Display for TankType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TankType {
    type Err = TankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RCT" => Ok(TankType::Rct),
            "SST" => Ok(TankType::Sst),
            "FM" => Ok(TankType::Fm),
            other => Err(TankError::validation(format!(
                "Unknown tank type '{other}' (expected RCT, SST or FM)"
            ))),
        }
    }
}

/// Store-assigned tank identifier.
pub type TankId = u64;

/// A tank model. `(tank_type, model)` is unique within a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    pub id: TankId,
    pub tank_type: TankType,
    pub model: String,
    /// Diameter in metres.
    pub diameter: f64,
}

impl Tank {
    /// Sales-facing model name for a given height variant.
    ///
    /// FM model names already carry their height. RCT and SST names get a
    /// `-<decimetres>` suffix, zero-padded to two digits for RCT only.
    pub fn display_name_with_height(&self, height: f64) -> String {
        let code = height_code(height);
        match self.tank_type {
            TankType::Fm => self.model.clone(),
            TankType::Rct => format!("{}-{:02}", self.model, code),
            TankType::Sst => format!("{}-{}", self.model, code),
        }
    }
}

impl fmt::Display for Tank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.tank_type, self.model)
    }
}

/// One height variant of a tank. `(tank_id, height)` is unique within a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    pub tank_id: TankId,
    /// Height in metres.
    pub height: f64,
    /// Capacity in the tank type's storage unit (litres for RCT/FM, m³ for SST).
    pub capacity: f64,
}

/// A capacity joined with the tank that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub tank: Tank,
    pub capacity: Capacity,
}

impl CatalogEntry {
    pub fn new(tank: Tank, capacity: Capacity) -> Self {
        Self { tank, capacity }
    }

    pub fn capacity_kl(&self) -> f64 {
        self.tank.tank_type.to_kl(self.capacity.capacity)
    }

    pub fn capacity_unit(&self) -> &'static str {
        self.tank.tank_type.capacity_unit()
    }

    pub fn display_model_name(&self) -> String {
        self.tank.display_name_with_height(self.capacity.height)
    }

    /// Raw capacity with its unit, e.g. `45,600 Litres`.
    pub fn capacity_display(&self) -> String {
        format!(
            "{} {}",
            format_grouped(self.capacity.capacity, 0),
            self.capacity_unit()
        )
    }

    /// Capacity in kilolitres, e.g. `45.60 KL`.
    pub fn capacity_kl_display(&self) -> String {
        format!("{} KL", format_grouped(self.capacity_kl(), 2))
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}m | {} {}",
            self.tank,
            self.capacity.height,
            self.capacity.capacity,
            self.capacity_unit()
        )
    }
}
