//! Decoded packet model.

use serde::{Deserialize, Serialize};

use crate::types::{CarClass, Drivetrain, Vector3, WheelSet};

/// One decoded telemetry packet.
///
/// Field order matches the wire layout. A frame is only ever produced whole by
/// [`crate::decode`]; when `is_race_on` is `false` the remaining fields are
/// still decoded and may hold stale or zero values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TelemetryFrame {
    // Race state
    pub is_race_on: bool,
    /// Game clock in milliseconds; wraps to 0.
    pub timestamp_ms: u32,

    // Engine
    pub engine_max_rpm: f32,
    pub engine_idle_rpm: f32,
    pub engine_current_rpm: f32,

    // Motion, car-local space
    pub acceleration: Vector3,
    pub velocity: Vector3,
    pub angular_velocity: Vector3,

    // Orientation, radians
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,

    /// 0.0 = max stretch, 1.0 = max compression.
    pub normalized_suspension_travel: WheelSet<f32>,
    /// 0 means full grip, `|ratio| > 1.0` means loss of grip.
    pub tire_slip_ratio: WheelSet<f32>,
    /// Radians per second.
    pub wheel_rotation_speed: WheelSet<f32>,
    pub wheel_on_rumble_strip: WheelSet<bool>,
    /// 0.0 to 1.0, where 1.0 is the deepest puddle.
    pub wheel_in_puddle_depth: WheelSet<f32>,
    /// Non-dimensional rumble values fed to controller force feedback.
    pub surface_rumble: WheelSet<f32>,
    pub tire_slip_angle: WheelSet<f32>,
    pub tire_combined_slip: WheelSet<f32>,
    /// Meters.
    pub suspension_travel: WheelSet<f32>,

    // Vehicle identity
    pub car_ordinal: i32,
    pub car_class: CarClass,
    /// Performance index, 100..=999 in game.
    pub car_pi: i32,
    pub drivetrain: Drivetrain,
    /// 0 for vehicles without a piston engine.
    pub num_cylinders: i32,

    /// World position in meters.
    pub position: Vector3,

    // Performance
    /// Meters per second.
    pub speed: f32,
    /// Watts.
    pub power: f32,
    /// Newton meters.
    pub torque: f32,
    pub tire_temp: WheelSet<f32>,
    pub boost: f32,
    pub fuel: f32,
    pub distance_traveled: f32,

    // Timing, seconds
    pub best_lap: f32,
    pub last_lap: f32,
    pub current_lap: f32,
    pub current_race_time: f32,
    pub lap_number: u16,
    pub race_position: u8,

    // Driver input
    pub accel: u8,
    pub brake: u8,
    pub clutch: u8,
    pub handbrake: u8,
    pub gear: u8,
    pub steer: i8,

    // AI hints
    pub normalized_driving_line: i8,
    pub normalized_ai_brake_difference: i8,
}

const MS_TO_KMH: f32 = 3.6;
const MS_TO_MPH: f32 = 2.236_936;

impl TelemetryFrame {
    pub fn speed_kmh(&self) -> f32 {
        self.speed * MS_TO_KMH
    }

    pub fn speed_mph(&self) -> f32 {
        self.speed * MS_TO_MPH
    }

    /// Dashboard gear label: `R` for gear 0, otherwise the gear number.
    pub fn gear_label(&self) -> String {
        match self.gear {
            0 => "R".to_string(),
            g => g.to_string(),
        }
    }

    /// Steering input scaled to `-1.0..=1.0`.
    pub fn steer_normalized(&self) -> f32 {
        (f32::from(self.steer) / 127.0).clamp(-1.0, 1.0)
    }

    /// Throttle input scaled to `0.0..=1.0`.
    pub fn accel_ratio(&self) -> f32 {
        f32::from(self.accel) / 255.0
    }

    /// Brake input scaled to `0.0..=1.0`.
    pub fn brake_ratio(&self) -> f32 {
        f32::from(self.brake) / 255.0
    }
}
