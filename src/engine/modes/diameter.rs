//! Diameter-only search: one representative row per tank of a similar diameter.

use crate::data::{CatalogEntry, TankType};
use crate::engine::config::SearchConfig;
use crate::engine::modes::ModeOutput;
use crate::engine::rank::{nearest_n, rank_and_cap, within_fraction};
use crate::engine::search::{ResultRecord, SearchInfo};
use crate::error::Result;
use crate::store::RecordStore;
use crate::util::numeric::round_dimension;

pub fn search(
    store: &dyn RecordStore,
    config: &SearchConfig,
    tank_type: TankType,
    diameter: f64,
) -> Result<ModeOutput> {
    let target = round_dimension(diameter);
    let available = store.distinct_diameters(tank_type)?;
    let mut candidates = within_fraction(&available, target, config.diameter_tolerance);
    if candidates.is_empty() {
        candidates = nearest_n(&available, target, config.diameter_nearest_fallback);
    }

    let tanks: Vec<_> = store
        .filter_by_type(tank_type)?
        .into_iter()
        .filter(|tank| candidates.contains(&tank.diameter))
        .collect();
    let tanks = rank_and_cap(tanks, config.listing_limit, |tank| tank.diameter);

    let mut results = Vec::with_capacity(tanks.len());
    for tank in tanks {
        // Lowest height stands in for the whole model.
        if let Some(first) = store.capacities_of(&tank)?.into_iter().next() {
            results.push(ResultRecord::from(&CatalogEntry::new(tank, first)));
        }
    }

    Ok((results, SearchInfo::Diameter { diameter }))
}
