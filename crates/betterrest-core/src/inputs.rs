//! Typed form inputs.
//!
//! These carry the bounds the input controls enforce: a sleep goal stepper
//! from 4 to 12 hours in quarter-hour steps, and a coffee picker offering
//! 1 through 19 cups. The estimator itself trusts whatever numbers it is
//! given; validation happens here, at the edge.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::time::TimeOfDay;

/// Desired wake-up time. Defaults to 07:00.
///
/// Serialized as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WakeTime(pub TimeOfDay);

impl Default for WakeTime {
    fn default() -> Self {
        Self(TimeOfDay::from_hm(7, 0).unwrap_or_default())
    }
}

impl WakeTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        TimeOfDay::from_hm(hour, minute).map(Self)
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        TimeOfDay::parse(input).map(Self)
    }

    pub fn time(&self) -> TimeOfDay {
        self.0
    }
}

impl TryFrom<String> for WakeTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WakeTime> for String {
    fn from(wake: WakeTime) -> Self {
        wake.0.to_string()
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Desired amount of sleep in hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SleepGoal(f64);

impl SleepGoal {
    pub const MIN: f64 = 4.0;
    pub const MAX: f64 = 12.0;
    pub const STEP: f64 = 0.25;
    pub const DEFAULT: f64 = 8.0;

    /// Accept `hours` only if it is in range and on a quarter-hour step.
    pub fn new(hours: f64) -> Result<Self, ValidationError> {
        if !hours.is_finite() || !(Self::MIN..=Self::MAX).contains(&hours) {
            return Err(ValidationError::OutOfRange {
                field: "sleep goal",
                min: Self::MIN.to_string(),
                max: Self::MAX.to_string(),
                value: hours.to_string(),
            });
        }
        let steps = (hours - Self::MIN) / Self::STEP;
        if (steps - steps.round()).abs() > 1e-9 {
            return Err(ValidationError::InvalidValue {
                field: "sleep goal",
                message: format!("{hours} is not a multiple of {}", Self::STEP),
            });
        }
        Ok(Self(hours))
    }

    /// Clamp into range and round to the nearest step. NaN maps to the default.
    pub fn snapped(hours: f64) -> Self {
        if hours.is_nan() {
            return Self::default();
        }
        let clamped = hours.clamp(Self::MIN, Self::MAX);
        let steps = ((clamped - Self::MIN) / Self::STEP).round();
        Self(Self::MIN + steps * Self::STEP)
    }

    pub fn hours(&self) -> f64 {
        self.0
    }

    /// One stepper increment, saturating at the maximum.
    pub fn increment(self) -> Self {
        Self::snapped(self.0 + Self::STEP)
    }

    /// One stepper decrement, saturating at the minimum.
    pub fn decrement(self) -> Self {
        Self::snapped(self.0 - Self::STEP)
    }

    /// Stepper label, e.g. `8 hours` or `8.25 hours`.
    pub fn label(&self) -> String {
        format!("{} hours", self.0)
    }

    /// Every value the stepper can reach, ascending.
    pub fn all() -> Vec<Self> {
        let count = ((Self::MAX - Self::MIN) / Self::STEP).round() as usize;
        (0..=count)
            .map(|i| Self(Self::MIN + i as f64 * Self::STEP))
            .collect()
    }
}

impl Default for SleepGoal {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<f64> for SleepGoal {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SleepGoal> for f64 {
    fn from(goal: SleepGoal) -> Self {
        goal.0
    }
}

impl fmt::Display for SleepGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Daily coffee intake in cups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CaffeineCount(u32);

impl CaffeineCount {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 19;

    pub fn new(cups: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&cups) {
            return Err(ValidationError::OutOfRange {
                field: "coffee",
                min: Self::MIN.to_string(),
                max: Self::MAX.to_string(),
                value: cups.to_string(),
            });
        }
        Ok(Self(cups))
    }

    pub fn cups(&self) -> u32 {
        self.0
    }

    /// Picker label, `1 cup` or `N cups`.
    pub fn label(&self) -> String {
        if self.0 == 1 {
            "1 cup".to_string()
        } else {
            format!("{} cups", self.0)
        }
    }

    /// Every picker choice, ascending.
    pub fn all() -> Vec<Self> {
        (Self::MIN..=Self::MAX).map(Self).collect()
    }
}

impl Default for CaffeineCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u32> for CaffeineCount {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CaffeineCount> for u32 {
    fn from(count: CaffeineCount) -> Self {
        count.0
    }
}

impl fmt::Display for CaffeineCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
