//! Height-only search: every capacity at the height closest to the target.

use crate::data::TankType;
use crate::engine::config::SearchConfig;
use crate::engine::modes::ModeOutput;
use crate::engine::rank::nearest;
use crate::engine::search::{ResultRecord, SearchInfo};
use crate::error::Result;
use crate::store::RecordStore;
use crate::util::numeric::round_dimension;

pub fn search(
    store: &dyn RecordStore,
    config: &SearchConfig,
    tank_type: TankType,
    height: f64,
) -> Result<ModeOutput> {
    let target = round_dimension(height);
    let heights = store.distinct_heights(tank_type)?;

    let mut entries = match nearest(&heights, target) {
        Some(h) => store.capacities_by_height(tank_type, h)?,
        None => store.capacities_in_height_range(
            tank_type,
            target - config.height_window,
            target + config.height_window,
        )?,
    };
    entries.truncate(config.listing_limit);

    let results = entries.iter().map(ResultRecord::from).collect();
    Ok((results, SearchInfo::Height { height }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::modes::fixtures::add_tank;
    use crate::store::memory::MemoryStore;

    #[test]
    fn test_returns_every_capacity_at_nearest_height() {
        let store = MemoryStore::new();
        add_tank(&store, TankType::Rct, "A", 3.0, &[(1.8, 12_700.0), (2.0, 14_100.0)]);
        add_tank(&store, TankType::Rct, "B", 4.0, &[(2.0, 25_100.0), (2.5, 31_400.0)]);
        add_tank(&store, TankType::Sst, "S", 4.0, &[(2.1, 26.4)]);

        let (results, info) =
            search(&store, &SearchConfig::default(), TankType::Rct, 2.1).unwrap();
        let models: Vec<&str> = results.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(models, vec!["A-20", "B-20"]);
        assert_eq!(info, SearchInfo::Height { height: 2.1 });
    }

    #[test]
    fn test_far_target_still_returns_nearest() {
        let store = MemoryStore::new();
        add_tank(&store, TankType::Fm, "F1", 3.0, &[(1.0, 7_000.0)]);
        let (results, _) =
            search(&store, &SearchConfig::default(), TankType::Fm, 40.0).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].height, 1.0);
    }

    #[test]
    fn test_empty_type_returns_nothing() {
        let store = MemoryStore::new();
        add_tank(&store, TankType::Fm, "F1", 3.0, &[]);
        let (results, _) =
            search(&store, &SearchConfig::default(), TankType::Fm, 2.0).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_results_are_capped_at_listing_limit() {
        let store = MemoryStore::new();
        for i in 0..25 {
            add_tank(&store, TankType::Rct, &format!("R{i:02}"), 3.0, &[(2.0, 14_100.0)]);
        }
        let (results, _) =
            search(&store, &SearchConfig::default(), TankType::Rct, 2.0).unwrap();
        assert_eq!(results.len(), 20);
    }
}
