use crate::data::{CatalogEntry, TankType};
use crate::engine::modes::ModeOutput;
use crate::engine::search::{ResultRecord, SearchInfo};
use crate::error::Result;
use crate::store::RecordStore;

/// Every height variant of every tank whose model contains `query`, ignoring case.
pub fn search(store: &dyn RecordStore, tank_type: TankType, query: &str) -> Result<ModeOutput> {
    let needle = query.to_lowercase();
    let mut results = Vec::new();
    for tank in store.filter_by_type(tank_type)? {
        if !tank.model.to_lowercase().contains(&needle) {
            continue;
        }
        for capacity in store.capacities_of(&tank)? {
            results.push(ResultRecord::from(&CatalogEntry::new(tank.clone(), capacity)));
        }
    }

    Ok((
        results,
        SearchInfo::Model {
            query: query.to_string(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::modes::fixtures::add_tank;
    use crate::store::memory::MemoryStore;

    #[test]
    fn test_model_search_is_case_insensitive_and_returns_every_height() {
        let store = MemoryStore::new();
        add_tank(&store, TankType::Rct, "xABCx", 3.0, &[(1.8, 12_700.0), (2.0, 14_100.0)]);
        add_tank(&store, TankType::Rct, "abc2", 4.0, &[(2.0, 25_100.0)]);
        add_tank(&store, TankType::Rct, "R99", 4.0, &[(2.0, 25_100.0)]);
        add_tank(&store, TankType::Sst, "ABC", 4.0, &[(2.0, 25.1)]);

        let (results, info) = search(&store, TankType::Rct, "abc").unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(names, vec!["abc2-20", "xABCx-18", "xABCx-20"]);
        assert_eq!(
            info,
            SearchInfo::Model {
                query: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_model_search_without_match_is_empty() {
        let store = MemoryStore::new();
        add_tank(&store, TankType::Fm, "F1", 3.0, &[(2.0, 14_100.0)]);
        let (results, _) = search(&store, TankType::Fm, "zzz").unwrap();
        assert!(results.is_empty());
    }
}
