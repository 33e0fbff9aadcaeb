//! Packet → [`TelemetryFrame`].

use crate::frame::TelemetryFrame;
use crate::offsets::{self, PACKET_SIZE};
use crate::types::{CarClass, Drivetrain};
use crate::wire::WireReader;
use crate::{DecodeError, DecodeResult};

/// Decode one 311-byte packet.
///
/// The length is checked before any field is touched. Fields are then read
/// sequentially in wire order; the frame is assembled only after every field,
/// including both enum codes, has been validated, so a failure never yields a
/// partial frame.
///
/// # Errors
///
/// - [`DecodeError::BadLength`] if `buffer.len() != 311`.
/// - [`DecodeError::InvalidEnum`] if `car_class` is outside `0..=7` or
///   `drivetrain` is outside `0..=2`.
pub fn decode(buffer: &[u8]) -> DecodeResult<TelemetryFrame> {
    if buffer.len() != PACKET_SIZE {
        return Err(DecodeError::BadLength {
            expected: PACKET_SIZE,
            actual: buffer.len(),
        });
    }

    let mut r = WireReader::new(buffer);

    let is_race_on = r.read_flag()?;
    let timestamp_ms = r.read_u32_le()?;

    let engine_max_rpm = r.read_f32_le()?;
    let engine_idle_rpm = r.read_f32_le()?;
    let engine_current_rpm = r.read_f32_le()?;

    let acceleration = r.read_vector3()?;
    let velocity = r.read_vector3()?;
    let angular_velocity = r.read_vector3()?;

    let yaw = r.read_f32_le()?;
    let pitch = r.read_f32_le()?;
    let roll = r.read_f32_le()?;

    let normalized_suspension_travel = r.read_wheels_f32()?;
    let tire_slip_ratio = r.read_wheels_f32()?;
    let wheel_rotation_speed = r.read_wheels_f32()?;
    let wheel_on_rumble_strip = r.read_wheel_flags()?;
    let wheel_in_puddle_depth = r.read_wheels_f32()?;
    let surface_rumble = r.read_wheels_f32()?;
    let tire_slip_angle = r.read_wheels_f32()?;
    let tire_combined_slip = r.read_wheels_f32()?;
    let suspension_travel = r.read_wheels_f32()?;

    debug_assert_eq!(r.position(), offsets::CAR_ORDINAL);
    let car_ordinal = r.read_i32_le()?;
    let car_class_code = r.read_i32_le()?;
    let car_pi = r.read_i32_le()?;
    let drivetrain_code = r.read_i32_le()?;
    let num_cylinders = r.read_i32_le()?;

    let car_class = CarClass::from_code(car_class_code).ok_or(DecodeError::InvalidEnum {
        field: "car_class",
        value: car_class_code,
    })?;
    let drivetrain = Drivetrain::from_code(drivetrain_code).ok_or(DecodeError::InvalidEnum {
        field: "drivetrain",
        value: drivetrain_code,
    })?;

    debug_assert_eq!(r.position(), offsets::POSITION);
    let position = r.read_vector3()?;

    let speed = r.read_f32_le()?;
    let power = r.read_f32_le()?;
    let torque = r.read_f32_le()?;

    let tire_temp = r.read_wheels_f32()?;

    let boost = r.read_f32_le()?;
    let fuel = r.read_f32_le()?;
    let distance_traveled = r.read_f32_le()?;

    let best_lap = r.read_f32_le()?;
    let last_lap = r.read_f32_le()?;
    let current_lap = r.read_f32_le()?;
    let current_race_time = r.read_f32_le()?;

    debug_assert_eq!(r.position(), offsets::LAP_NUMBER);
    let lap_number = r.read_u16_le()?;
    let race_position = r.read_u8()?;

    let accel = r.read_u8()?;
    let brake = r.read_u8()?;
    let clutch = r.read_u8()?;
    let handbrake = r.read_u8()?;
    let gear = r.read_u8()?;
    let steer = r.read_i8()?;

    let normalized_driving_line = r.read_i8()?;
    let normalized_ai_brake_difference = r.read_i8()?;
    debug_assert_eq!(r.position(), PACKET_SIZE);

    Ok(TelemetryFrame {
        is_race_on,
        timestamp_ms,
        engine_max_rpm,
        engine_idle_rpm,
        engine_current_rpm,
        acceleration,
        velocity,
        angular_velocity,
        yaw,
        pitch,
        roll,
        normalized_suspension_travel,
        tire_slip_ratio,
        wheel_rotation_speed,
        wheel_on_rumble_strip,
        wheel_in_puddle_depth,
        surface_rumble,
        tire_slip_angle,
        tire_combined_slip,
        suspension_travel,
        car_ordinal,
        car_class,
        car_pi,
        drivetrain,
        num_cylinders,
        position,
        speed,
        power,
        torque,
        tire_temp,
        boost,
        fuel,
        distance_traveled,
        best_lap,
        last_lap,
        current_lap,
        current_race_time,
        lap_number,
        race_position,
        accel,
        brake,
        clutch,
        handbrake,
        gear,
        steer,
        normalized_driving_line,
        normalized_ai_brake_difference,
    })
}
