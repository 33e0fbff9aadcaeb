//! Forza Horizon telemetry receiver.
//!
//! Binds a UDP socket, decodes every inbound datagram with
//! [`horizon_telemetry_forza::decode`] and publishes the newest frame to a
//! single overwrite slot.
//!
//! ```no_run
//! use std::sync::Arc;
//! use horizon_telemetry_receiver::{NullSink, ReceiverConfig, TelemetryReceiver};
//!
//! # async fn run() -> Result<(), horizon_telemetry_receiver::ReceiverError> {
//! let handle = TelemetryReceiver::new(ReceiverConfig::default())
//!     .with_sink(Arc::new(NullSink))
//!     .start()
//!     .await?;
//!
//! if let Some(frame) = handle.latest().get() {
//!     println!("car {} at {:.1} m/s", frame.car_ordinal, frame.speed);
//! }
//!
//! handle.stop().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Delivery model
//!
//! - One datagram is one candidate packet; nothing is buffered across receives.
//! - Malformed datagrams are counted in [`ReceiverStats`] and dropped. They never
//!   stop the loop.
//! - The [`LatestFrame`] slot holds at most one frame. Frames are replaced, not
//!   queued, so a slow reader only ever misses intermediate states.
//! - [`ReceiverHandle::stop`] returns once the socket has been closed; no frame
//!   is published after it returns.

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod receiver;
pub mod sink;
pub mod slot;
pub mod stats;

pub use config::{BindMode, MAX_DATAGRAM_SIZE, ReceiverConfig, port_from_input};
pub use receiver::{ReceiverHandle, TelemetryReceiver};
pub use sink::{FrameSink, NullSink};
pub use slot::LatestFrame;
pub use stats::{ReceiverStats, StatsSnapshot};

use std::net::SocketAddr;
use thiserror::Error;

/// Errors returned by the receiver lifecycle.
///
/// Per-datagram decode failures are not errors at this level; they are logged
/// and counted.
#[derive(Error, Debug)]
pub enum ReceiverError {
    #[error("Failed to bind UDP socket on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Receive task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Convenience result alias for receiver operations.
pub type ReceiverResult<T> = Result<T, ReceiverError>;
