//! Checks that re-encoding a decoded packet is stable.
//!
//! Flag words are normalised to 0/1 on decode, so the first encode may differ
//! from the input; from then on the bytes must not change.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_forza_horizon_roundtrip
#![no_main]
use horizon_telemetry_forza::{decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(frame) = decode(data) {
        let bytes = encode(&frame);
        match decode(&bytes) {
            Ok(again) => assert_eq!(encode(&again), bytes),
            Err(e) => panic!("re-encoded packet failed to decode: {e}"),
        }
    }
});
