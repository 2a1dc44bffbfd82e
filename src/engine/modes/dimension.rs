//! Dimension search: nearest tanks for a requested diameter and height.
//!
//! Candidates are drawn from a diameter window around the target (15%, then
//! 25%, then the few nearest diameters). Each candidate tank contributes the
//! capacity at its height closest to the target, and rows are ranked by a
//! score that mixes the volume error with weighted dimension errors.

use std::f64::consts::PI;

use crate::data::{Capacity, CatalogEntry, TankType};
use crate::engine::config::SearchConfig;
use crate::engine::modes::ModeOutput;
use crate::engine::rank::{nearest, nearest_n, rank_and_cap, within_fraction};
use crate::engine::search::{MatchType, ResultRecord, SearchInfo};
use crate::error::Result;
use crate::store::RecordStore;
use crate::util::numeric::{round_dimension, round_to};

/// Volume of a cylinder in m³ (equivalently KL).
pub fn cylinder_volume(diameter: f64, height: f64) -> f64 {
    let radius = diameter / 2.0;
    PI * radius * radius * height
}

struct Scored {
    entry: CatalogEntry,
    score: f64,
    diameter_diff: f64,
    height_diff: f64,
}

pub fn search(
    store: &dyn RecordStore,
    config: &SearchConfig,
    tank_type: TankType,
    diameter: f64,
    height: f64,
) -> Result<ModeOutput> {
    let target_diameter = round_dimension(diameter);
    let target_height = round_dimension(height);
    let volume = cylinder_volume(target_diameter, target_height);

    let available = store.distinct_diameters(tank_type)?;
    let candidates = candidate_diameters(&available, target_diameter, config);
    log::debug!(
        "dimension search {tank_type}: {} of {} diameters near {target_diameter}",
        candidates.len(),
        available.len()
    );

    let mut scored = Vec::new();
    for tank in store.filter_by_type(tank_type)? {
        if !candidates.contains(&tank.diameter) {
            continue;
        }
        let capacities = store.capacities_of(&tank)?;
        let heights: Vec<f64> = capacities.iter().map(|c| c.height).collect();
        // Nearest height is unconditional; there is no distance cutoff here.
        let picked: Vec<Capacity> = match nearest(&heights, target_height) {
            Some(h) => capacities.into_iter().filter(|c| c.height == h).take(1).collect(),
            None => {
                log::warn!("tank {tank} has no capacity records");
                capacities
            }
        };

        for capacity in picked {
            let entry = CatalogEntry::new(tank.clone(), capacity);
            let diameter_diff = (entry.tank.diameter - target_diameter).abs();
            let height_diff = (entry.capacity.height - target_height).abs();
            let capacity_diff = (entry.capacity_kl() - volume).abs();
            let score = capacity_diff
                + diameter_diff * config.diameter_weight
                + height_diff * config.height_weight;
            scored.push(Scored {
                entry,
                score,
                diameter_diff,
                height_diff,
            });
        }
    }

    let results = rank_and_cap(scored, config.ranked_limit, |s| s.score)
        .into_iter()
        .map(|s| {
            let mut record = ResultRecord::from(&s.entry);
            record.match_type = Some(MatchType::Approximate);
            record.diameter_diff = Some(round_to(s.diameter_diff, 2));
            record.height_diff = Some(round_to(s.height_diff, 2));
            record
        })
        .collect();

    Ok((
        results,
        SearchInfo::Dimensions {
            calculated_volume: round_to(volume, 2),
            diameter: target_diameter,
            height: target_height,
        },
    ))
}

/// Diameters eligible for a dimension search, closest first.
///
/// Only returns an empty list when `available` is empty.
fn candidate_diameters(available: &[f64], target: f64, config: &SearchConfig) -> Vec<f64> {
    let close = within_fraction(available, target, config.dimension_tolerance);
    if !close.is_empty() {
        return close;
    }
    let wider = within_fraction(available, target, config.dimension_fallback_tolerance);
    if !wider.is_empty() {
        return wider;
    }
    nearest_n(available, target, config.dimension_nearest_fallback)
}
