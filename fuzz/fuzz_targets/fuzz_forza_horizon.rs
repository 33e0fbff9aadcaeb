//! Fuzzes the Forza Horizon telemetry packet decoder.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_forza_horizon
#![no_main]
use horizon_telemetry_forza::{DecodeError, PACKET_SIZE, decode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are expected, panics are not.
    match decode(data) {
        Ok(_) => assert_eq!(data.len(), PACKET_SIZE),
        Err(DecodeError::BadLength { actual, .. }) => assert_eq!(actual, data.len()),
        Err(DecodeError::InvalidEnum { .. }) => assert_eq!(data.len(), PACKET_SIZE),
    }
});
