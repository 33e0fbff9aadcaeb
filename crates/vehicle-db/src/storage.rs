//! On-disk form of the vehicle table.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{VehicleDbError, VehicleDbResult};
use crate::record::VehicleRecord;

/// Ordinal-keyed table. serde_json writes the integer keys as JSON strings.
pub(crate) type VehicleTable = BTreeMap<i32, VehicleRecord>;

/// Read the table at `path`. A missing file is `Ok(None)`.
pub(crate) fn read_table(path: &Path) -> VehicleDbResult<Option<VehicleTable>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(VehicleDbError::io(path, e)),
    };

    let table = serde_json::from_str(&content).map_err(|source| VehicleDbError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(table))
}

/// Write the table to `path` via a sibling temp file and a rename, so a crash
/// mid-write leaves the previous file intact.
pub(crate) fn write_table_atomic(path: &Path, table: &VehicleTable) -> VehicleDbResult<()> {
    let content = serde_json::to_string_pretty(table).map_err(VehicleDbError::Serialize)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| VehicleDbError::io(parent, e))?;
    }

    let temp_path = path.with_extension("json.tmp");
    debug!(path = ?path, temp = ?temp_path, "Writing vehicle table atomically");

    fs::write(&temp_path, content).map_err(|e| VehicleDbError::io(&temp_path, e))?;
    fs::rename(&temp_path, path).map_err(|e| VehicleDbError::io(path, e))?;
    Ok(())
}
