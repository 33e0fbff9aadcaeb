//! Value types shared by the frame model.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Coarse performance tier, ordered `E < D < C < B < A < S1 < S2 < X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum CarClass {
    #[default]
    E = 0,
    D = 1,
    C = 2,
    B = 3,
    A = 4,
    S1 = 5,
    S2 = 6,
    X = 7,
}

impl CarClass {
    /// All classes in ascending order.
    pub const ALL: [CarClass; 8] = [
        CarClass::E,
        CarClass::D,
        CarClass::C,
        CarClass::B,
        CarClass::A,
        CarClass::S1,
        CarClass::S2,
        CarClass::X,
    ];

    /// Map a wire code to a class. Codes outside `0..=7` return `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(CarClass::E),
            1 => Some(CarClass::D),
            2 => Some(CarClass::C),
            3 => Some(CarClass::B),
            4 => Some(CarClass::A),
            5 => Some(CarClass::S1),
            6 => Some(CarClass::S2),
            7 => Some(CarClass::X),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CarClass::E => "E",
            CarClass::D => "D",
            CarClass::C => "C",
            CarClass::B => "B",
            CarClass::A => "A",
            CarClass::S1 => "S1",
            CarClass::S2 => "S2",
            CarClass::X => "X",
        }
    }
}

impl fmt::Display for CarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Driven axles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum Drivetrain {
    #[default]
    Fwd = 0,
    Rwd = 1,
    Awd = 2,
}

impl Drivetrain {
    /// Map a wire code to a drivetrain. Codes outside `0..=2` return `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Drivetrain::Fwd),
            1 => Some(Drivetrain::Rwd),
            2 => Some(Drivetrain::Awd),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Drivetrain::Fwd => "FWD",
            Drivetrain::Rwd => "RWD",
            Drivetrain::Awd => "AWD",
        }
    }
}

impl fmt::Display for Drivetrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-component vector in car-local space.
///
/// For linear quantities X is right, Y is up and Z is forward. For angular
/// velocity X is pitch, Y is yaw and Z is roll.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// One value per wheel.
///
/// The wire always carries wheels as Front-Left, Front-Right, Rear-Left,
/// Rear-Right; [`WheelSet::to_array`] and [`WheelSet::iter`] keep that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WheelSet<T> {
    pub front_left: T,
    pub front_right: T,
    pub rear_left: T,
    pub rear_right: T,
}

impl<T: Copy> WheelSet<T> {
    pub const fn new(front_left: T, front_right: T, rear_left: T, rear_right: T) -> Self {
        Self {
            front_left,
            front_right,
            rear_left,
            rear_right,
        }
    }

    /// Same value on all four wheels.
    pub const fn splat(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn from_array(values: [T; 4]) -> Self {
        let [front_left, front_right, rear_left, rear_right] = values;
        Self::new(front_left, front_right, rear_left, rear_right)
    }

    pub const fn to_array(&self) -> [T; 4] {
        [
            self.front_left,
            self.front_right,
            self.rear_left,
            self.rear_right,
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = T> {
        self.to_array().into_iter()
    }

    pub fn map<U: Copy>(&self, mut f: impl FnMut(T) -> U) -> WheelSet<U> {
        WheelSet::new(
            f(self.front_left),
            f(self.front_right),
            f(self.rear_left),
            f(self.rear_right),
        )
    }
}

impl WheelSet<bool> {
    /// `true` if any wheel is set.
    pub fn any(&self) -> bool {
        self.iter().any(|v| v)
    }
}
