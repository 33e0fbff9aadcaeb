//! Forza Horizon 4 "Data Out" telemetry packet decoder.
//!
//! The game streams one fixed-size UDP datagram per simulation tick. This crate
//! turns that datagram into a [`TelemetryFrame`] and back again. It performs no
//! I/O and holds no state; the receive loop lives in
//! `horizon-telemetry-receiver`.
//!
//! ## Wire format
//!
//! | Property | Value |
//! |----------|-------|
//! | Transport | UDP, one packet per datagram, game → listener |
//! | Size | exactly [`PACKET_SIZE`] (311) bytes |
//! | Byte order | little-endian |
//! | Padding | none |
//!
//! Field offsets are listed in [`offsets`]. The first 232 bytes share their
//! layout with the older "Sled" packet; the remainder carries the dashboard
//! block (position, speed, tire temps, lap timing and driver inputs). Sled-only
//! packets are rejected with [`DecodeError::BadLength`].
//!
//! ## Decoding rules
//!
//! - Integer-coded booleans (`is_race_on`, the four rumble-strip flags) are
//!   `true` for any non-zero 32-bit pattern.
//! - `car_class` (0–7) and `drivetrain` (0–2) are mapped to enums; any other
//!   code fails the whole decode with [`DecodeError::InvalidEnum`].
//! - Floats are copied bit-for-bit. NaN and infinities pass through untouched.
//!
//! ```
//! use horizon_telemetry_forza::{decode, encode, TelemetryFrame};
//!
//! let frame = TelemetryFrame {
//!     is_race_on: true,
//!     car_ordinal: 42,
//!     speed: 30.5,
//!     ..TelemetryFrame::default()
//! };
//! let bytes = encode(&frame);
//! assert_eq!(decode(&bytes), Ok(frame));
//! ```

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod decode;
pub mod encode;
pub mod frame;
pub mod offsets;
pub mod types;
mod wire;

pub use decode::decode;
pub use encode::encode;
pub use frame::TelemetryFrame;
pub use offsets::PACKET_SIZE;
pub use types::{CarClass, Drivetrain, Vector3, WheelSet};

use thiserror::Error;

/// Default UDP port the listener binds when none is configured.
pub const DEFAULT_PORT: u16 = 9909;

/// Errors returned by [`decode`].
///
/// Both variants are per-datagram failures: a receiver drops the packet and
/// keeps listening.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid packet length: expected {expected}, got {actual}")]
    BadLength { expected: usize, actual: usize },

    #[error("Invalid {field} code: {value}")]
    InvalidEnum { field: &'static str, value: i32 },
}

impl DecodeError {
    /// `true` for [`DecodeError::BadLength`].
    pub fn is_length_error(&self) -> bool {
        matches!(self, DecodeError::BadLength { .. })
    }

    /// Name of the offending enum field, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DecodeError::InvalidEnum { field, .. } => Some(field),
            DecodeError::BadLength { .. } => None,
        }
    }
}

/// Convenience result alias for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
