//! Property-based tests for the packet decoder.
//!
//! Uses proptest with 500 cases to check totality, determinism, length
//! rejection and encode/decode symmetry over arbitrary inputs.

use horizon_telemetry_forza::{
    CarClass, DecodeError, Drivetrain, PACKET_SIZE, TelemetryFrame, Vector3, WheelSet, decode,
    encode, offsets,
};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f32> {
    -1.0e6f32..1.0e6f32
}

fn vector3() -> impl Strategy<Value = Vector3> {
    (finite(), finite(), finite()).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn wheels() -> impl Strategy<Value = WheelSet<f32>> {
    prop::array::uniform4(finite()).prop_map(WheelSet::from_array)
}

fn car_class() -> impl Strategy<Value = CarClass> {
    prop::sample::select(CarClass::ALL.to_vec())
}

fn drivetrain() -> impl Strategy<Value = Drivetrain> {
    prop::sample::select(vec![Drivetrain::Fwd, Drivetrain::Rwd, Drivetrain::Awd])
}

prop_compose! {
    fn arb_frame()(
        head in (any::<bool>(), any::<u32>(), finite(), finite(), finite()),
        motion in (vector3(), vector3(), vector3(), finite(), finite(), finite()),
        tires_a in (wheels(), wheels(), wheels(), prop::array::uniform4(any::<bool>())),
        tires_b in (wheels(), wheels(), wheels(), wheels(), wheels()),
        identity in (any::<i32>(), car_class(), any::<i32>(), drivetrain(), any::<i32>()),
        perf in (vector3(), finite(), finite(), finite(), wheels(), finite(), finite(), finite()),
        timing in (finite(), finite(), finite(), finite(), any::<u16>(), any::<u8>()),
        inputs in (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>(), any::<i8>()),
        hints in (any::<i8>(), any::<i8>()),
    ) -> TelemetryFrame {
        TelemetryFrame {
            is_race_on: head.0,
            timestamp_ms: head.1,
            engine_max_rpm: head.2,
            engine_idle_rpm: head.3,
            engine_current_rpm: head.4,
            acceleration: motion.0,
            velocity: motion.1,
            angular_velocity: motion.2,
            yaw: motion.3,
            pitch: motion.4,
            roll: motion.5,
            normalized_suspension_travel: tires_a.0,
            tire_slip_ratio: tires_a.1,
            wheel_rotation_speed: tires_a.2,
            wheel_on_rumble_strip: WheelSet::from_array(tires_a.3),
            wheel_in_puddle_depth: tires_b.0,
            surface_rumble: tires_b.1,
            tire_slip_angle: tires_b.2,
            tire_combined_slip: tires_b.3,
            suspension_travel: tires_b.4,
            car_ordinal: identity.0,
            car_class: identity.1,
            car_pi: identity.2,
            drivetrain: identity.3,
            num_cylinders: identity.4,
            position: perf.0,
            speed: perf.1,
            power: perf.2,
            torque: perf.3,
            tire_temp: perf.4,
            boost: perf.5,
            fuel: perf.6,
            distance_traveled: perf.7,
            best_lap: timing.0,
            last_lap: timing.1,
            current_lap: timing.2,
            current_race_time: timing.3,
            lap_number: timing.4,
            race_position: timing.5,
            accel: inputs.0,
            brake: inputs.1,
            clutch: inputs.2,
            handbrake: inputs.3,
            gear: inputs.4,
            steer: inputs.5,
            normalized_driving_line: hints.0,
            normalized_ai_brake_difference: hints.1,
        }
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(500))]

    /// decode must never panic, whatever the input.
    #[test]
    fn prop_decode_never_panics(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let _ = decode(&data);
    }

    /// Any length other than 311 is a BadLength carrying the actual length.
    #[test]
    fn prop_wrong_length_is_bad_length(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
        prop_assume!(data.len() != PACKET_SIZE);
        prop_assert_eq!(
            decode(&data),
            Err(DecodeError::BadLength { expected: PACKET_SIZE, actual: data.len() })
        );
    }

    /// Identical bytes give identical results. Compared on the re-encoded
    /// bytes so NaN payloads do not defeat equality.
    #[test]
    fn prop_decode_deterministic(data in prop::collection::vec(any::<u8>(), PACKET_SIZE)) {
        match (decode(&data), decode(&data)) {
            (Ok(a), Ok(b)) => prop_assert_eq!(encode(&a), encode(&b)),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "diverging results: {:?} vs {:?}", a, b),
        }
    }

    /// With valid enum codes every 311-byte buffer decodes, and re-encoding
    /// reproduces the input exactly, bit for bit.
    #[test]
    fn prop_valid_buffers_reencode_identically(
        mut data in prop::collection::vec(any::<u8>(), PACKET_SIZE),
        class_code in 0i32..=7,
        drivetrain_code in 0i32..=2,
        race_on in prop::sample::select(vec![0i32, 1]),
        rumble in prop::array::uniform4(prop::sample::select(vec![0i32, 1])),
    ) {
        data[offsets::CAR_CLASS..offsets::CAR_CLASS + 4].copy_from_slice(&class_code.to_le_bytes());
        data[offsets::DRIVETRAIN..offsets::DRIVETRAIN + 4]
            .copy_from_slice(&drivetrain_code.to_le_bytes());
        data[offsets::IS_RACE_ON..offsets::IS_RACE_ON + 4].copy_from_slice(&race_on.to_le_bytes());
        for (i, flag) in rumble.iter().enumerate() {
            let at = offsets::WHEEL_ON_RUMBLE_STRIP + i * 4;
            data[at..at + 4].copy_from_slice(&flag.to_le_bytes());
        }

        let frame = decode(&data);
        prop_assert!(frame.is_ok(), "decode failed: {:?}", frame);
        if let Ok(frame) = frame {
            prop_assert_eq!(encode(&frame), data);
        }
    }

    /// encode then decode returns the original frame.
    #[test]
    fn prop_round_trip(frame in arb_frame()) {
        let bytes = encode(&frame);
        prop_assert_eq!(bytes.len(), PACKET_SIZE);
        prop_assert_eq!(decode(&bytes), Ok(frame));
    }

    /// Class codes outside 0..=7 always fail with InvalidEnum.
    #[test]
    fn prop_out_of_range_class_rejected(code in any::<i32>()) {
        prop_assume!(!(0..=7).contains(&code));
        let mut data = encode(&TelemetryFrame::default());
        data[offsets::CAR_CLASS..offsets::CAR_CLASS + 4].copy_from_slice(&code.to_le_bytes());
        prop_assert_eq!(
            decode(&data),
            Err(DecodeError::InvalidEnum { field: "car_class", value: code })
        );
    }

    /// Drivetrain codes outside 0..=2 always fail with InvalidEnum.
    #[test]
    fn prop_out_of_range_drivetrain_rejected(code in any::<i32>()) {
        prop_assume!(!(0..=2).contains(&code));
        let mut data = encode(&TelemetryFrame::default());
        data[offsets::DRIVETRAIN..offsets::DRIVETRAIN + 4].copy_from_slice(&code.to_le_bytes());
        prop_assert_eq!(
            decode(&data),
            Err(DecodeError::InvalidEnum { field: "drivetrain", value: code })
        );
    }

    /// is_race_on is true exactly when the 32-bit pattern is non-zero.
    #[test]
    fn prop_race_on_nonzero(pattern in any::<i32>()) {
        let mut data = encode(&TelemetryFrame::default());
        data[offsets::IS_RACE_ON..offsets::IS_RACE_ON + 4].copy_from_slice(&pattern.to_le_bytes());
        let frame = decode(&data);
        prop_assert_eq!(frame.map(|f| f.is_race_on), Ok(pattern != 0));
    }
}
