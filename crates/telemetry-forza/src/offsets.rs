//! Byte offsets of every field in the 311-byte packet.
//!
//! Grouped fields (vectors and per-wheel quantities) list the offset of the
//! first component only; components follow contiguously in X, Y, Z or
//! FL, FR, RL, RR order, 4 bytes each.

/// Total packet size in bytes.
pub const PACKET_SIZE: usize = 311;

/// Size of the legacy Sled prefix shared with older titles.
pub const SLED_SIZE: usize = 232;

// ── Sled block ───────────────────────────────────────────────────────────────
pub const IS_RACE_ON: usize = 0; // i32
pub const TIMESTAMP_MS: usize = 4; // u32
pub const ENGINE_MAX_RPM: usize = 8; // f32
pub const ENGINE_IDLE_RPM: usize = 12; // f32
pub const ENGINE_CURRENT_RPM: usize = 16; // f32
pub const ACCELERATION: usize = 20; // 3 × f32, car-local
pub const VELOCITY: usize = 32; // 3 × f32, car-local
pub const ANGULAR_VELOCITY: usize = 44; // 3 × f32 (pitch, yaw, roll)
pub const YAW: usize = 56; // f32
pub const PITCH: usize = 60; // f32
pub const ROLL: usize = 64; // f32
pub const NORMALIZED_SUSPENSION_TRAVEL: usize = 68; // 4 × f32
pub const TIRE_SLIP_RATIO: usize = 84; // 4 × f32
pub const WHEEL_ROTATION_SPEED: usize = 100; // 4 × f32, rad/s
pub const WHEEL_ON_RUMBLE_STRIP: usize = 116; // 4 × i32
pub const WHEEL_IN_PUDDLE_DEPTH: usize = 132; // 4 × f32
pub const SURFACE_RUMBLE: usize = 148; // 4 × f32
pub const TIRE_SLIP_ANGLE: usize = 164; // 4 × f32
pub const TIRE_COMBINED_SLIP: usize = 180; // 4 × f32
pub const SUSPENSION_TRAVEL: usize = 196; // 4 × f32, meters
pub const CAR_ORDINAL: usize = 212; // i32
pub const CAR_CLASS: usize = 216; // i32, 0..=7
pub const CAR_PI: usize = 220; // i32
pub const DRIVETRAIN: usize = 224; // i32, 0..=2
pub const NUM_CYLINDERS: usize = 228; // i32

// ── Dashboard block ──────────────────────────────────────────────────────────
pub const POSITION: usize = 232; // 3 × f32, meters
pub const SPEED: usize = 244; // f32, m/s
pub const POWER: usize = 248; // f32, W
pub const TORQUE: usize = 252; // f32, N·m
pub const TIRE_TEMP: usize = 256; // 4 × f32
pub const BOOST: usize = 272; // f32
pub const FUEL: usize = 276; // f32
pub const DISTANCE_TRAVELED: usize = 280; // f32
pub const BEST_LAP: usize = 284; // f32, s
pub const LAST_LAP: usize = 288; // f32, s
pub const CURRENT_LAP: usize = 292; // f32, s
pub const CURRENT_RACE_TIME: usize = 296; // f32, s
pub const LAP_NUMBER: usize = 300; // u16
pub const RACE_POSITION: usize = 302; // u8
pub const ACCEL: usize = 303; // u8
pub const BRAKE: usize = 304; // u8
pub const CLUTCH: usize = 305; // u8
pub const HANDBRAKE: usize = 306; // u8
pub const GEAR: usize = 307; // u8
pub const STEER: usize = 308; // i8
pub const NORMALIZED_DRIVING_LINE: usize = 309; // i8
pub const NORMALIZED_AI_BRAKE_DIFFERENCE: usize = 310; // i8
