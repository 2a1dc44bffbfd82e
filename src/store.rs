//! Record store: the read interface the search engine depends on, plus the
//! in-memory implementation and its bulk loader.
//!
//! # Module Structure
//!
//! - [`memory`] - `MemoryStore`, an `RwLock`-guarded catalog with JSON snapshots
//! - [`loader`] - CSV bulk import into a `MemoryStore`
//!
//! # Ordering
//!
//! Implementations return records in natural store order: tanks by
//! `(tank_type, model)`, capacities by owning tank and then by height.
//! Diameter- and height-only searches rely on this order to break ties.

pub mod loader;
pub mod memory;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::{Capacity, CatalogEntry, Tank, TankType};
use crate::error::Result;

/// Read access to tank and capacity records.
///
/// Search never writes through this trait. Implementations must be safe to
/// read from several threads at once.
pub trait RecordStore: Send + Sync {
    /// All tanks of a category, in store order.
    fn filter_by_type(&self, tank_type: TankType) -> Result<Vec<Tank>>;

    /// Distinct tank diameters of a category, in order of first appearance.
    fn distinct_diameters(&self, tank_type: TankType) -> Result<Vec<f64>>;

    /// Distinct capacity heights across every tank of a category, in order of first appearance.
    fn distinct_heights(&self, tank_type: TankType) -> Result<Vec<f64>>;

    /// Capacity records of one tank, by height ascending.
    fn capacities_of(&self, tank: &Tank) -> Result<Vec<Capacity>>;

    /// Every capacity of a category whose height equals `height` exactly.
    fn capacities_by_height(&self, tank_type: TankType, height: f64) -> Result<Vec<CatalogEntry>>;

    /// Every capacity of a category with height in `[lo, hi]`, by height ascending.
    fn capacities_in_height_range(
        &self,
        tank_type: TankType,
        lo: f64,
        hi: f64,
    ) -> Result<Vec<CatalogEntry>>;
}

/// Record counts for one tank category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeStats {
    pub tank_count: usize,
    pub capacity_count: usize,
}

/// Record counts per tank category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub by_type: BTreeMap<TankType, TypeStats>,
}

impl CatalogStats {
    pub fn tank_count(&self) -> usize {
        self.by_type.values().map(|s| s.tank_count).sum()
    }

    pub fn capacity_count(&self) -> usize {
        self.by_type.values().map(|s| s.capacity_count).sum()
    }
}
