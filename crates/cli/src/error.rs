//! Error types for fh-telemetry

use horizon_telemetry_receiver::ReceiverError;
use horizon_vehicle_db::VehicleDbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Receiver error: {0}")]
    Receiver(#[from] ReceiverError),

    #[error("Failed to save vehicle table: {0}")]
    VehicleSave(#[from] VehicleDbError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Receiver(ReceiverError::Bind { .. }) => 2,
            CliError::VehicleSave(_) => 3,
            _ => 1,
        }
    }

    /// Short machine-readable category used in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Receiver(ReceiverError::Bind { .. }) => "bind_failed",
            CliError::Receiver(_) => "receiver_failed",
            CliError::VehicleSave(_) => "vehicle_save_failed",
            CliError::InvalidConfiguration(_) => "invalid_configuration",
            CliError::IoError(_) => "io_error",
            CliError::JsonError(_) => "json_error",
        }
    }
}
