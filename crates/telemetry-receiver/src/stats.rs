//! Receive loop counters.
//!
//! Updated from the receive task with `Ordering::Relaxed`; readers take a
//! [`StatsSnapshot`] whenever they need a consistent-enough view.

use core::sync::atomic::{AtomicU64, Ordering};

use horizon_telemetry_forza::DecodeError;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of [`ReceiverStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Datagrams read from the socket, valid or not
    pub datagrams_received: u64,
    /// Frames decoded and published to the latest-frame slot
    pub frames_published: u64,
    /// Datagrams dropped for having the wrong length
    pub bad_length: u64,
    /// Datagrams dropped for an out-of-range class or drivetrain code
    pub invalid_enum: u64,
    /// Socket receive errors
    pub recv_errors: u64,
}

impl StatsSnapshot {
    /// Datagrams that failed to decode.
    pub fn dropped(&self) -> u64 {
        self.bad_length.saturating_add(self.invalid_enum)
    }
}

/// Lock-free counters shared between the receive task and its handle.
#[derive(Debug, Default)]
pub struct ReceiverStats {
    datagrams_received: AtomicU64,
    frames_published: AtomicU64,
    bad_length: AtomicU64,
    invalid_enum: AtomicU64,
    recv_errors: AtomicU64,
}

impl ReceiverStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            datagrams_received: AtomicU64::new(0),
            frames_published: AtomicU64::new(0),
            bad_length: AtomicU64::new(0),
            invalid_enum: AtomicU64::new(0),
            recv_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn record_datagram(&self) {
        self.datagrams_received.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_frame(&self) {
        self.frames_published.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_decode_error(&self, error: &DecodeError) {
        match error {
            DecodeError::BadLength { .. } => self.bad_length.fetch_add(1, Ordering::Relaxed),
            DecodeError::InvalidEnum { .. } => self.invalid_enum.fetch_add(1, Ordering::Relaxed),
        };
    }

    #[inline]
    pub fn record_recv_error(&self) {
        self.recv_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            datagrams_received: self.datagrams_received.load(Ordering::Relaxed),
            frames_published: self.frames_published.load(Ordering::Relaxed),
            bad_length: self.bad_length.load(Ordering::Relaxed),
            invalid_enum: self.invalid_enum.load(Ordering::Relaxed),
            recv_errors: self.recv_errors.load(Ordering::Relaxed),
        }
    }
}
