//! Capacity search: nearest tanks for a requested volume in kilolitres.
//!
//! RCT and SST admit only capacities inside an asymmetric window around the
//! target (a little smaller, considerably larger) and label every row. FM has
//! no window and no labels.

use crate::data::{CatalogEntry, TankType};
use crate::engine::config::SearchConfig;
use crate::engine::modes::ModeOutput;
use crate::engine::rank::rank_and_cap;
use crate::engine::search::{MatchLabel, ResultRecord, SearchInfo};
use crate::error::Result;
use crate::store::RecordStore;
use crate::util::numeric::round_to;

struct Scored {
    entry: CatalogEntry,
    capacity_kl: f64,
    diff: f64,
}

pub fn search(
    store: &dyn RecordStore,
    config: &SearchConfig,
    tank_type: TankType,
    target: f64,
) -> Result<ModeOutput> {
    let bounds = tank_type.uses_capacity_window().then(|| {
        (
            target - config.capacity_lower_margin,
            target + config.capacity_upper_margin,
        )
    });

    let mut scored = Vec::new();
    for tank in store.filter_by_type(tank_type)? {
        for capacity in store.capacities_of(&tank)? {
            let entry = CatalogEntry::new(tank.clone(), capacity);
            let capacity_kl = entry.capacity_kl();
            if let Some((lower, upper)) = bounds {
                if capacity_kl < lower || capacity_kl > upper {
                    continue;
                }
            }
            scored.push(Scored {
                entry,
                capacity_kl,
                diff: (capacity_kl - target).abs(),
            });
        }
    }
    log::debug!(
        "capacity search {tank_type}: {} candidates for {target} KL",
        scored.len()
    );

    let results = rank_and_cap(scored, config.ranked_limit, |s| s.diff)
        .into_iter()
        .map(|s| {
            let mut record = ResultRecord::from(&s.entry);
            record.match_difference = Some(round_to(s.diff, 2));
            if bounds.is_some() {
                record.match_label = Some(label(s.diff, s.capacity_kl, target, config));
            }
            record
        })
        .collect();

    Ok((
        results,
        SearchInfo::Capacity {
            capacity_kl: target,
            lower_bound: bounds.map(|(lower, _)| lower),
            upper_bound: bounds.map(|(_, upper)| upper),
        },
    ))
}

fn label(diff: f64, capacity_kl: f64, target: f64, config: &SearchConfig) -> MatchLabel {
    if diff < config.exact_match_threshold {
        MatchLabel::ExactMatch
    } else if capacity_kl > target {
        MatchLabel::HigherCapacityOption
    } else {
        MatchLabel::ClosestMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::modes::fixtures::add_tank;
    use crate::store::memory::MemoryStore;

    fn labelled_store() -> MemoryStore {
        let store = MemoryStore::new();
        add_tank(
            &store,
            TankType::Rct,
            "R1",
            4.0,
            &[
                (1.0, 45_000.0),
                (1.5, 48_000.0),
                (2.0, 50_000.0),
                (2.5, 55_000.0),
                (3.0, 90_000.0),
                (3.5, 91_000.0),
            ],
        );
        store
    }

    #[test]
    fn test_window_and_labels() {
        let store = labelled_store();
        let (results, info) =
            search(&store, &SearchConfig::default(), TankType::Rct, 50.0).unwrap();

        let rows: Vec<(f64, Option<MatchLabel>)> = results
            .iter()
            .map(|r| (r.capacity_kl, r.match_label))
            .collect();
        assert_eq!(
            rows,
            vec![
                (50.0, Some(MatchLabel::ExactMatch)),
                (48.0, Some(MatchLabel::ClosestMatch)),
                (55.0, Some(MatchLabel::HigherCapacityOption)),
                (90.0, Some(MatchLabel::HigherCapacityOption)),
            ]
        );
        assert_eq!(results[2].match_difference, Some(5.0));
        assert_eq!(
            info,
            SearchInfo::Capacity {
                capacity_kl: 50.0,
                lower_bound: Some(46.0),
                upper_bound: Some(90.0),
            }
        );
    }

    #[test]
    fn test_sst_uses_raw_cubic_metres() {
        let store = MemoryStore::new();
        add_tank(&store, TankType::Sst, "S1", 4.0, &[(2.0, 51.0), (3.0, 100.0)]);
        let (results, _) =
            search(&store, &SearchConfig::default(), TankType::Sst, 50.0).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_label, Some(MatchLabel::ExactMatch));
    }

    #[test]
    fn test_fm_has_no_window_or_label() {
        let store = MemoryStore::new();
        add_tank(
            &store,
            TankType::Fm,
            "F1",
            4.0,
            &[(1.0, 5_000.0), (2.0, 500_000.0)],
        );
        let (results, info) =
            search(&store, &SearchConfig::default(), TankType::Fm, 50.0).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].capacity_kl, 5.0);
        assert_eq!(results[0].match_difference, Some(45.0));
        assert!(results.iter().all(|r| r.match_label.is_none()));
        assert_eq!(
            info,
            SearchInfo::Capacity {
                capacity_kl: 50.0,
                lower_bound: None,
                upper_bound: None,
            }
        );
    }

    #[test]
    fn test_results_are_capped() {
        let store = MemoryStore::new();
        let variants: Vec<(f64, f64)> = (0..30)
            .map(|i| (1.0 + i as f64 * 0.1, 50_000.0 + i as f64 * 100.0))
            .collect();
        add_tank(&store, TankType::Rct, "R1", 4.0, &variants);
        let (results, _) =
            search(&store, &SearchConfig::default(), TankType::Rct, 50.0).unwrap();
        assert_eq!(results.len(), 15);
    }
}
