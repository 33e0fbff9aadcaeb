//! [`TelemetryFrame`] → packet.
//!
//! Produces the exact bytes the game would send for a frame. Used to build
//! fixtures and by the synthetic sender; `decode(&encode(f)) == Ok(f)` for every
//! frame whose floats are not NaN.

use crate::frame::TelemetryFrame;
use crate::offsets::PACKET_SIZE;
use crate::wire::WireWriter;

/// Serialize a frame into a 311-byte packet.
pub fn encode(frame: &TelemetryFrame) -> Vec<u8> {
    let mut w = WireWriter::with_capacity(PACKET_SIZE);

    w.write_flag(frame.is_race_on)
        .write_u32_le(frame.timestamp_ms)
        .write_f32_le(frame.engine_max_rpm)
        .write_f32_le(frame.engine_idle_rpm)
        .write_f32_le(frame.engine_current_rpm)
        .write_vector3(&frame.acceleration)
        .write_vector3(&frame.velocity)
        .write_vector3(&frame.angular_velocity)
        .write_f32_le(frame.yaw)
        .write_f32_le(frame.pitch)
        .write_f32_le(frame.roll)
        .write_wheels_f32(&frame.normalized_suspension_travel)
        .write_wheels_f32(&frame.tire_slip_ratio)
        .write_wheels_f32(&frame.wheel_rotation_speed)
        .write_wheel_flags(&frame.wheel_on_rumble_strip)
        .write_wheels_f32(&frame.wheel_in_puddle_depth)
        .write_wheels_f32(&frame.surface_rumble)
        .write_wheels_f32(&frame.tire_slip_angle)
        .write_wheels_f32(&frame.tire_combined_slip)
        .write_wheels_f32(&frame.suspension_travel)
        .write_i32_le(frame.car_ordinal)
        .write_i32_le(frame.car_class.code())
        .write_i32_le(frame.car_pi)
        .write_i32_le(frame.drivetrain.code())
        .write_i32_le(frame.num_cylinders)
        .write_vector3(&frame.position)
        .write_f32_le(frame.speed)
        .write_f32_le(frame.power)
        .write_f32_le(frame.torque)
        .write_wheels_f32(&frame.tire_temp)
        .write_f32_le(frame.boost)
        .write_f32_le(frame.fuel)
        .write_f32_le(frame.distance_traveled)
        .write_f32_le(frame.best_lap)
        .write_f32_le(frame.last_lap)
        .write_f32_le(frame.current_lap)
        .write_f32_le(frame.current_race_time)
        .write_u16_le(frame.lap_number)
        .write_u8(frame.race_position)
        .write_u8(frame.accel)
        .write_u8(frame.brake)
        .write_u8(frame.clutch)
        .write_u8(frame.handbrake)
        .write_u8(frame.gear)
        .write_i8(frame.steer)
        .write_i8(frame.normalized_driving_line)
        .write_i8(frame.normalized_ai_brake_difference);

    debug_assert_eq!(w.len(), PACKET_SIZE);
    w.into_inner()
}
