//! In-memory record store with JSON snapshot persistence.

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::data::{Capacity, CatalogEntry, Tank, TankId, TankType};
use crate::error::{Result, TankError};
use crate::store::{CatalogStats, RecordStore};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct Catalog {
    next_id: TankId,
    /// Sorted by `(tank_type, model)`.
    tanks: Vec<Tank>,
    /// Per-tank capacities, each list sorted by height.
    capacities: BTreeMap<TankId, Vec<Capacity>>,
}

impl Catalog {
    fn tank(&self, id: TankId) -> Option<&Tank> {
        self.tanks.iter().find(|t| t.id == id)
    }

    fn tank_position(&self, tank_type: TankType, model: &str) -> std::result::Result<usize, usize> {
        self.tanks
            .binary_search_by(|t| (t.tank_type, t.model.as_str()).cmp(&(tank_type, model)))
    }

    fn tanks_of(&self, tank_type: TankType) -> impl Iterator<Item = &Tank> {
        self.tanks.iter().filter(move |t| t.tank_type == tank_type)
    }

    fn capacities(&self, id: TankId) -> &[Capacity] {
        self.capacities.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every `(tank, capacity)` pair of a category in store order.
    fn entries_of(&self, tank_type: TankType) -> impl Iterator<Item = (&Tank, &Capacity)> {
        self.tanks_of(tank_type)
            .flat_map(move |tank| self.capacities(tank.id).iter().map(move |cap| (tank, cap)))
    }
}

/// A catalog held in memory behind a read-write lock.
///
/// Reads take a shared lock, so concurrent searches never block each other.
/// Writes (bulk load, administrative edits) take the exclusive lock and keep
/// the store-order and uniqueness invariants intact.
#[derive(Debug, Default)]
pub struct MemoryStore {
    catalog: RwLock<Catalog>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a snapshot written by [`save`](Self::save). A missing file yields an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no snapshot at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };
        let catalog: Catalog = serde_json::from_reader(BufReader::new(file))?;
        log::debug!(
            "loaded snapshot {} ({} tanks)",
            path.display(),
            catalog.tanks.len()
        );
        Ok(Self {
            catalog: RwLock::new(catalog),
        })
    }

    /// Write the whole catalog to `path` as JSON, creating parent directories.
    ///
    /// The snapshot is written to a temporary file next to `path` and renamed
    /// over it, so a failed write leaves the previous snapshot intact.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        {
            let catalog = self.catalog.read();
            let mut writer = BufWriter::new(file.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, &*catalog)?;
            writer.flush()?;
        }
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Look up a tank by id.
    pub fn tank(&self, id: TankId) -> Option<Tank> {
        self.catalog.read().tank(id).cloned()
    }

    /// Look up a tank by its unique `(tank_type, model)` key.
    pub fn find_tank(&self, tank_type: TankType, model: &str) -> Option<Tank> {
        let catalog = self.catalog.read();
        catalog
            .tank_position(tank_type, model)
            .ok()
            .map(|pos| catalog.tanks[pos].clone())
    }

    /// Return the tank keyed by `(tank_type, model)`, creating it with
    /// `diameter` if absent. An existing tank keeps its stored diameter.
    pub fn get_or_create_tank(
        &self,
        tank_type: TankType,
        model: &str,
        diameter: f64,
    ) -> Result<(Tank, bool)> {
        let mut catalog = self.catalog.write();
        match catalog.tank_position(tank_type, model) {
            Ok(pos) => Ok((catalog.tanks[pos].clone(), false)),
            Err(pos) => {
                catalog.next_id += 1;
                let tank = Tank {
                    id: catalog.next_id,
                    tank_type,
                    model: model.to_string(),
                    diameter,
                };
                catalog.tanks.insert(pos, tank.clone());
                catalog.capacities.insert(tank.id, Vec::new());
                Ok((tank, true))
            }
        }
    }

    /// Return the capacity at `(tank_id, height)`, creating it if absent.
    /// An existing record keeps its stored capacity.
    pub fn get_or_create_capacity(
        &self,
        tank_id: TankId,
        height: f64,
        capacity: f64,
    ) -> Result<(Capacity, bool)> {
        let mut catalog = self.catalog.write();
        if catalog.tank(tank_id).is_none() {
            return Err(TankError::store(format!("tank {tank_id} does not exist")));
        }
        let caps = catalog.capacities.entry(tank_id).or_default();
        match caps.binary_search_by(|c| c.height.total_cmp(&height)) {
            Ok(pos) => Ok((caps[pos].clone(), false)),
            Err(pos) => {
                let record = Capacity {
                    tank_id,
                    height,
                    capacity,
                };
                caps.insert(pos, record.clone());
                Ok((record, true))
            }
        }
    }

    /// Replace a tank's type, model and diameter.
    ///
    /// Fails if the tank does not exist or if the new `(tank_type, model)`
    /// already belongs to another tank.
    pub fn update_tank(&self, tank: &Tank) -> Result<()> {
        let mut catalog = self.catalog.write();
        let current = catalog
            .tanks
            .iter()
            .position(|t| t.id == tank.id)
            .ok_or_else(|| TankError::store(format!("tank {} does not exist", tank.id)))?;
        if let Ok(pos) = catalog.tank_position(tank.tank_type, &tank.model) {
            if catalog.tanks[pos].id != tank.id {
                return Err(TankError::store(format!(
                    "tank {} {} already exists",
                    tank.tank_type, tank.model
                )));
            }
        }
        catalog.tanks.remove(current);
        let pos = catalog
            .tank_position(tank.tank_type, &tank.model)
            .unwrap_or_else(|pos| pos);
        catalog.tanks.insert(pos, tank.clone());
        Ok(())
    }

    /// Overwrite the capacity value stored at `(tank_id, height)`.
    /// Returns `false` if no such record exists.
    pub fn update_capacity(&self, tank_id: TankId, height: f64, capacity: f64) -> bool {
        let mut catalog = self.catalog.write();
        let Some(caps) = catalog.capacities.get_mut(&tank_id) else {
            return false;
        };
        match caps.iter_mut().find(|c| c.height == height) {
            Some(record) => {
                record.capacity = capacity;
                true
            }
            None => false,
        }
    }

    /// Remove a tank together with all of its capacities.
    pub fn remove_tank(&self, id: TankId) -> bool {
        let mut catalog = self.catalog.write();
        let Some(pos) = catalog.tanks.iter().position(|t| t.id == id) else {
            return false;
        };
        catalog.tanks.remove(pos);
        catalog.capacities.remove(&id);
        true
    }

    /// Remove a single capacity record.
    pub fn remove_capacity(&self, tank_id: TankId, height: f64) -> bool {
        let mut catalog = self.catalog.write();
        let Some(caps) = catalog.capacities.get_mut(&tank_id) else {
            return false;
        };
        let before = caps.len();
        caps.retain(|c| c.height != height);
        caps.len() != before
    }

    /// Record counts per tank category. Categories without tanks are omitted.
    pub fn stats(&self) -> CatalogStats {
        let catalog = self.catalog.read();
        let mut stats = CatalogStats::default();
        for tank in &catalog.tanks {
            let entry = stats.by_type.entry(tank.tank_type).or_default();
            entry.tank_count += 1;
            entry.capacity_count += catalog.capacities(tank.id).len();
        }
        stats
    }
}

impl RecordStore for MemoryStore {
    fn filter_by_type(&self, tank_type: TankType) -> Result<Vec<Tank>> {
        Ok(self.catalog.read().tanks_of(tank_type).cloned().collect())
    }

    fn distinct_diameters(&self, tank_type: TankType) -> Result<Vec<f64>> {
        let catalog = self.catalog.read();
        let mut diameters: Vec<f64> = Vec::new();
        for tank in catalog.tanks_of(tank_type) {
            if !diameters.contains(&tank.diameter) {
                diameters.push(tank.diameter);
            }
        }
        Ok(diameters)
    }

    fn distinct_heights(&self, tank_type: TankType) -> Result<Vec<f64>> {
        let catalog = self.catalog.read();
        let mut heights: Vec<f64> = Vec::new();
        for (_, cap) in catalog.entries_of(tank_type) {
            if !heights.contains(&cap.height) {
                heights.push(cap.height);
            }
        }
        Ok(heights)
    }

    fn capacities_of(&self, tank: &Tank) -> Result<Vec<Capacity>> {
        Ok(self.catalog.read().capacities(tank.id).to_vec())
    }

    fn capacities_by_height(&self, tank_type: TankType, height: f64) -> Result<Vec<CatalogEntry>> {
        let catalog = self.catalog.read();
        Ok(catalog
            .entries_of(tank_type)
            .filter(|(_, cap)| cap.height == height)
            .map(|(tank, cap)| CatalogEntry::new(tank.clone(), cap.clone()))
            .collect())
    }

    fn capacities_in_height_range(
        &self,
        tank_type: TankType,
        lo: f64,
        hi: f64,
    ) -> Result<Vec<CatalogEntry>> {
        let catalog = self.catalog.read();
        let mut entries: Vec<CatalogEntry> = catalog
            .entries_of(tank_type)
            .filter(|(_, cap)| cap.height >= lo && cap.height <= hi)
            .map(|(tank, cap)| CatalogEntry::new(tank.clone(), cap.clone()))
            .collect();
        entries.sort_by(|a, b| a.capacity.height.total_cmp(&b.capacity.height));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::Builder;

    fn sample_store() -> MemoryStore {
        let store = MemoryStore::new();
        let (b, _) = store.get_or_create_tank(TankType::Rct, "B20", 3.0).unwrap();
        let (a, _) = store.get_or_create_tank(TankType::Rct, "A10", 2.5).unwrap();
        let (s, _) = store.get_or_create_tank(TankType::Sst, "S1", 3.0).unwrap();
        store.get_or_create_capacity(b.id, 2.5, 17_000.0).unwrap();
        store.get_or_create_capacity(b.id, 1.8, 12_000.0).unwrap();
        store.get_or_create_capacity(a.id, 2.0, 9_500.0).unwrap();
        store.get_or_create_capacity(s.id, 2.0, 14.0).unwrap();
        store
    }

    #[test]
    fn test_tanks_are_kept_in_model_order() {
        let store = sample_store();
        let models: Vec<String> = store
            .filter_by_type(TankType::Rct)
            .unwrap()
            .into_iter()
            .map(|t| t.model)
            .collect();
        assert_eq!(models, vec!["A10", "B20"]);
    }

    #[test]
    fn test_capacities_are_kept_in_height_order() {
        let store = sample_store();
        let tank = store.find_tank(TankType::Rct, "B20").unwrap();
        let heights: Vec<f64> = store
            .capacities_of(&tank)
            .unwrap()
            .into_iter()
            .map(|c| c.height)
            .collect();
        assert_eq!(heights, vec![1.8, 2.5]);
    }

    #[test]
    fn test_get_or_create_keeps_existing_values() {
        let store = sample_store();
        let (tank, created) = store.get_or_create_tank(TankType::Rct, "B20", 9.9).unwrap();
        assert!(!created);
        assert_eq!(tank.diameter, 3.0);

        let (cap, created) = store.get_or_create_capacity(tank.id, 1.8, 1.0).unwrap();
        assert!(!created);
        assert_eq!(cap.capacity, 12_000.0);
    }

    #[test]
    fn test_capacity_requires_existing_tank() {
        let store = MemoryStore::new();
        assert!(store.get_or_create_capacity(42, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_distinct_values_are_per_type() {
        let store = sample_store();
        assert_eq!(store.distinct_diameters(TankType::Rct).unwrap(), vec![2.5, 3.0]);
        assert_eq!(store.distinct_diameters(TankType::Sst).unwrap(), vec![3.0]);
        assert_eq!(store.distinct_heights(TankType::Rct).unwrap(), vec![2.0, 1.8, 2.5]);
        assert!(store.distinct_heights(TankType::Fm).unwrap().is_empty());
    }

    #[test]
    fn test_height_queries() {
        let store = sample_store();
        let exact = store.capacities_by_height(TankType::Rct, 2.0).unwrap();
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].tank.model, "A10");

        let range = store
            .capacities_in_height_range(TankType::Rct, 1.5, 2.5)
            .unwrap();
        let heights: Vec<f64> = range.iter().map(|e| e.capacity.height).collect();
        assert_eq!(heights, vec![1.8, 2.0, 2.5]);
    }

    #[test]
    fn test_remove_tank_cascades() {
        let store = sample_store();
        let tank = store.find_tank(TankType::Rct, "B20").unwrap();
        assert!(store.remove_tank(tank.id));
        assert!(store.capacities_of(&tank).unwrap().is_empty());
        assert_eq!(store.distinct_heights(TankType::Rct).unwrap(), vec![2.0]);
        assert!(!store.remove_tank(tank.id));
    }

    #[test]
    fn test_update_tank_enforces_uniqueness() {
        let store = sample_store();
        let mut tank = store.find_tank(TankType::Rct, "A10").unwrap();
        tank.model = "B20".to_string();
        assert!(store.update_tank(&tank).is_err());

        tank.model = "C30".to_string();
        tank.diameter = 4.0;
        store.update_tank(&tank).unwrap();
        let models: Vec<String> = store
            .filter_by_type(TankType::Rct)
            .unwrap()
            .into_iter()
            .map(|t| t.model)
            .collect();
        assert_eq!(models, vec!["B20", "C30"]);
        assert_eq!(store.tank(tank.id).unwrap().diameter, 4.0);
    }

    #[test]
    fn test_update_and_remove_capacity() {
        let store = sample_store();
        let tank = store.find_tank(TankType::Rct, "B20").unwrap();
        assert!(store.update_capacity(tank.id, 1.8, 12_500.0));
        assert!(!store.update_capacity(tank.id, 9.9, 1.0));
        assert_eq!(store.capacities_of(&tank).unwrap()[0].capacity, 12_500.0);

        assert!(store.remove_capacity(tank.id, 1.8));
        assert_eq!(store.capacities_of(&tank).unwrap().len(), 1);
    }

    #[test]
    fn test_stats() {
        let stats = sample_store().stats();
        assert_eq!(stats.tank_count(), 3);
        assert_eq!(stats.capacity_count(), 4);
        assert_eq!(stats.by_type[&TankType::Rct].tank_count, 2);
        assert!(!stats.by_type.contains_key(&TankType::Fm));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let dir = Builder::new().prefix("test_snapshot").tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.json");

        let store = sample_store();
        store.save(&path).unwrap();

        let reopened = MemoryStore::open(&path).unwrap();
        assert_eq!(reopened.stats(), store.stats());
        let (tank, created) = reopened
            .get_or_create_tank(TankType::Fm, "F1", 5.0)
            .unwrap();
        assert!(created);
        assert!(store.tank(tank.id).is_none());
    }

    #[test]
    fn test_save_replaces_snapshot_without_leftovers() {
        let dir = Builder::new().prefix("test_snapshot").tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let store = sample_store();
        store.save(&path).unwrap();
        store.remove_tank(store.find_tank(TankType::Sst, "S1").unwrap().id);
        store.save(&path).unwrap();

        let reopened = MemoryStore::open(&path).unwrap();
        assert_eq!(reopened.stats().tank_count(), 2);
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_failed_save_leaves_no_partial_file() {
        let dir = Builder::new().prefix("test_snapshot").tempdir().unwrap();
        let snapshot = dir.path().join("catalog.json");
        sample_store().save(&snapshot).unwrap();

        // Renaming onto a directory fails after the data has been written.
        let blocked = dir.path().join("blocked");
        fs::create_dir(&blocked).unwrap();
        assert!(sample_store().save(&blocked).is_err());

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["blocked", "catalog.json"]);
        assert_eq!(MemoryStore::open(&snapshot).unwrap().stats().tank_count(), 3);
    }

    #[test]
    fn test_open_missing_snapshot_is_empty() {
        let dir = Builder::new().prefix("test_snapshot").tempdir().unwrap();
        let store = MemoryStore::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(store.stats().tank_count(), 0);
    }
}
