//! Shared vehicle table.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::error::{VehicleDbError, VehicleDbResult};
use crate::record::VehicleRecord;
use crate::storage::{self, VehicleTable};

/// Car ordinal to [`VehicleRecord`] table, optionally backed by a JSON file.
///
/// Loaded once at startup and saved explicitly at shutdown. Lookups take a
/// read lock, so the store can be shared as `Arc<VehicleDb>` between the
/// receive task and the rest of the process.
#[derive(Debug)]
pub struct VehicleDb {
    path: Option<PathBuf>,
    vehicles: RwLock<VehicleTable>,
}

impl VehicleDb {
    /// Store with no backing file.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            vehicles: RwLock::new(VehicleTable::new()),
        }
    }

    /// Load the table at `path`, degrading to an empty table.
    ///
    /// A missing file is the normal first-run case and is not logged above
    /// debug. An unreadable or malformed file is logged at warn; the next
    /// [`save`](Self::save) overwrites it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let vehicles = match storage::read_table(&path) {
            Ok(Some(table)) => {
                info!(path = ?path, vehicles = table.len(), "Loaded vehicle table");
                table
            }
            Ok(None) => {
                debug!(path = ?path, "No vehicle table yet, starting empty");
                VehicleTable::new()
            }
            Err(e) => {
                warn!(path = ?path, error = %e, "Ignoring unreadable vehicle table");
                VehicleTable::new()
            }
        };

        Self {
            path: Some(path),
            vehicles: RwLock::new(vehicles),
        }
    }

    /// Like [`open`](Self::open) but surfaces read and parse failures.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleDbError::Io`] or [`VehicleDbError::Parse`] when the file
    /// exists but cannot be used.
    pub fn load(path: impl Into<PathBuf>) -> VehicleDbResult<Self> {
        let path = path.into();
        let vehicles = storage::read_table(&path)?.unwrap_or_default();
        Ok(Self {
            path: Some(path),
            vehicles: RwLock::new(vehicles),
        })
    }

    /// Record for `id`, or [`VehicleRecord::unknown`] when absent.
    pub fn get_vehicle(&self, id: i32) -> VehicleRecord {
        self.vehicles
            .read()
            .get(&id)
            .cloned()
            .unwrap_or_else(VehicleRecord::unknown)
    }

    /// Insert `record` under `id` unless an entry already exists.
    ///
    /// Returns `true` when inserted. Existing entries are never overwritten.
    pub fn add_vehicle(&self, id: i32, record: VehicleRecord) -> bool {
        let mut vehicles = self.vehicles.write();
        if vehicles.contains_key(&id) {
            return false;
        }
        debug!(id, vehicle = %record, "Adding vehicle");
        vehicles.insert(id, record);
        true
    }

    pub fn contains(&self, id: i32) -> bool {
        self.vehicles.read().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.read().is_empty()
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the table to its backing file atomically.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleDbError::NoBackingFile`] for in-memory stores, or the
    /// underlying IO/serialization error.
    pub fn save(&self) -> VehicleDbResult<()> {
        let path = self.path.as_deref().ok_or(VehicleDbError::NoBackingFile)?;
        let snapshot = self.vehicles.read().clone();
        storage::write_table_atomic(path, &snapshot)?;
        info!(path = ?path, vehicles = snapshot.len(), "Saved vehicle table");
        Ok(())
    }
}

impl Default for VehicleDb {
    fn default() -> Self {
        Self::in_memory()
    }
}
