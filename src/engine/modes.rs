//! One handler per [`SearchMode`](super::query::SearchMode) variant.
//!
//! Each handler reads from the store, applies its own tolerance and ranking
//! rules, and returns formatted rows together with the metadata describing
//! how the request was interpreted.

pub mod capacity;
pub mod diameter;
pub mod dimension;
pub mod height;
pub mod model;

use super::search::{ResultRecord, SearchInfo};

/// Rows and metadata produced by a mode handler.
pub type ModeOutput = (Vec<ResultRecord>, SearchInfo);

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::data::{Tank, TankType};
    use crate::store::memory::MemoryStore;

    /// Add a tank with `(height, capacity)` variants to `store`.
    pub fn add_tank(
        store: &MemoryStore,
        tank_type: TankType,
        model: &str,
        diameter: f64,
        variants: &[(f64, f64)],
    ) -> Tank {
        let (tank, _) = store.get_or_create_tank(tank_type, model, diameter).unwrap();
        for &(height, capacity) in variants {
            store.get_or_create_capacity(tank.id, height, capacity).unwrap();
        }
        tank
    }
}
