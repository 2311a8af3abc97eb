use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Settings shared by callers that compare or print results.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LinalgConfig {
    /// Absolute tolerance for approximate comparisons.
    pub tolerance: f64,

    /// Unit that angles are read and reported in.
    pub angle_unit: AngleUnit,

    /// Decimal places used when printing results.
    pub precision: usize,
}

/// Unit for user-facing angles. All library math works in radians.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Radians,
    Degrees,
}

impl Default for AngleUnit {
    fn default() -> Self {
        AngleUnit::Degrees
    }
}

impl AngleUnit {
    /// Convert a value expressed in this unit to radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => value.to_radians(),
        }
    }

    /// Convert a value in radians to this unit.
    pub fn from_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => value.to_degrees(),
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            AngleUnit::Radians => "rad",
            AngleUnit::Degrees => "deg",
        }
    }
}

impl FromStr for AngleUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rad" | "radian" | "radians" => Ok(AngleUnit::Radians),
            "deg" | "degree" | "degrees" => Ok(AngleUnit::Degrees),
            _ => Err(format!(
                "Unknown angle unit: {}. Expected one of `rad`, `radians`, `deg`, `degrees`",
                s
            )),
        }
    }
}

impl LinalgConfig {
    /// Default absolute tolerance.
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;
    pub const DEFAULT_PRECISION: usize = 6;

    pub fn new(tolerance: f64, angle_unit: AngleUnit) -> Self {
        Self {
            tolerance,
            angle_unit,
            precision: Self::DEFAULT_PRECISION,
        }
    }

    /// Reject settings no comparison can use: a negative or NaN tolerance.
    pub fn validate(&self) -> Result<(), String> {
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(format!(
                "Tolerance must be non-negative, got {}",
                self.tolerance
            ));
        }
        Ok(())
    }

    /// Replace values within `tolerance` of zero by exactly zero.
    ///
    /// Rotations by multiples of 90 degrees leave residue like `6.1e-17`;
    /// this keeps printed output readable.
    pub fn snap(&self, value: f64) -> f64 {
        if value.abs() <= self.tolerance {
            0.0
        } else {
            value
        }
    }
}

impl Default for LinalgConfig {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            angle_unit: AngleUnit::default(),
            precision: Self::DEFAULT_PRECISION,
        }
    }
}
