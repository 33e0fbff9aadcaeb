//! Vehicle description stored per car ordinal.

use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

const UNKNOWN_MAKE: &str = "Unknown";
const UNKNOWN_MODEL: &str = "Vehicle";

/// Make, model and model year of one car.
///
/// Displays as `{year} {make} {model}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    #[serde(alias = "Make")]
    pub make: String,
    #[serde(alias = "Model")]
    pub model: String,
    #[serde(alias = "Year")]
    pub year: i32,
}

impl VehicleRecord {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
        }
    }

    /// Placeholder returned for ordinals missing from the table, dated to the
    /// current local year.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_MAKE, UNKNOWN_MODEL, chrono::Local::now().year())
    }

    pub fn is_unknown(&self) -> bool {
        self.make == UNKNOWN_MAKE && self.model == UNKNOWN_MODEL
    }
}

impl fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.make, self.model)
    }
}
