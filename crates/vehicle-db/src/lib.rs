//! Car ordinal lookup for Forza Horizon telemetry.
//!
//! Maps the opaque `car_ordinal` carried in every packet to a make, model and
//! model year. The table lives in a JSON object keyed by the decimal ordinal:
//!
//! ```json
//! { "3012": { "make": "Ford", "model": "Focus RS", "year": 2017 } }
//! ```
//!
//! Unknown ordinals resolve to an "Unknown Vehicle" sentinel, so lookups never
//! fail.

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod record;
mod storage;
pub mod store;

pub use error::{VehicleDbError, VehicleDbResult};
pub use record::VehicleRecord;
pub use store::VehicleDb;
