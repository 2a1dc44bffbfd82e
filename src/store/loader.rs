//! CSV bulk import.
//!
//! Expected header columns: `model`, `diameter`, `height`, and one of
//! `capacity` / `capacity_m3` (the first non-empty one is used). The tank
//! category is chosen by the caller, not read from the file. Import is
//! get-or-create: re-importing a file never changes records that already exist.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

use crate::data::TankType;
use crate::error::{Result, TankError};
use crate::store::memory::MemoryStore;

#[derive(Debug, Deserialize)]
struct CsvRow {
    model: String,
    diameter: f64,
    height: f64,
    #[serde(default)]
    capacity: Option<f64>,
    #[serde(default)]
    capacity_m3: Option<f64>,
}

/// Summary returned after a completed import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub rows: usize,
    pub tanks_created: usize,
    pub capacities_created: usize,
}

/// Import CSV rows from `reader` as tanks of `tank_type`.
///
/// Stops at the first malformed row; rows before it stay imported.
pub fn import_csv<R: Read>(
    store: &MemoryStore,
    tank_type: TankType,
    reader: R,
) -> Result<ImportSummary> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut summary = ImportSummary::default();

    for (index, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        // Header is line 1.
        let line = index + 2;
        let row = row?;
        let capacity = row.capacity.or(row.capacity_m3).ok_or_else(|| {
            TankError::import(format!("line {line}: missing capacity / capacity_m3 value"))
        })?;
        if row.model.is_empty() {
            return Err(TankError::import(format!("line {line}: empty model name")));
        }
        check_measurement(line, "diameter", row.diameter)?;
        check_measurement(line, "height", row.height)?;
        check_measurement(line, "capacity", capacity)?;

        let (tank, tank_created) = store.get_or_create_tank(tank_type, &row.model, row.diameter)?;
        let (_, cap_created) = store.get_or_create_capacity(tank.id, row.height, capacity)?;

        summary.rows += 1;
        summary.tanks_created += usize::from(tank_created);
        summary.capacities_created += usize::from(cap_created);
    }

    log::info!(
        "imported {} {} rows: {} tanks, {} capacities created",
        summary.rows,
        tank_type,
        summary.tanks_created,
        summary.capacities_created
    );
    Ok(summary)
}

/// Measurements must be finite and positive; a NaN or infinity would not
/// survive a JSON snapshot.
fn check_measurement(line: usize, column: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TankError::import(format!(
            "line {line}: {column} must be a positive number, got {value}"
        )))
    }
}

/// Import a CSV file. See [`import_csv`].
pub fn import_csv_file(
    store: &MemoryStore,
    tank_type: TankType,
    path: impl AsRef<Path>,
) -> Result<ImportSummary> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| {
        TankError::import(format!("cannot open '{}': {e}", path.display()))
    })?;
    import_csv(store, tank_type, file)
}
