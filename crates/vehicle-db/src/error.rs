//! Error types for vehicle table persistence

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the vehicle table file.
#[derive(Error, Debug)]
pub enum VehicleDbError {
    /// Filesystem error on a specific path
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents were not a valid vehicle table
    #[error("Invalid vehicle table in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization of the in-memory table failed
    #[error("Failed to serialize vehicle table: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Save requested on a store that has no backing file
    #[error("Vehicle table has no backing file")]
    NoBackingFile,
}

impl VehicleDbError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for vehicle table operations
pub type VehicleDbResult<T> = Result<T, VehicleDbError>;
