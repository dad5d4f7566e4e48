//! Time-of-day values and short time formatting.

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Regions whose locales default to a 12-hour clock.
const TWELVE_HOUR_REGIONS: &[&str] = &[
    "US", "CA", "AU", "NZ", "PH", "IN", "PK", "EG", "SA", "BD", "MY", "CO",
];

/// A wall-clock time of day, without a date.
///
/// Arithmetic wraps at midnight; only the time-of-day component survives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build from hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::OutOfRange {
                field: "hour",
                min: "0".into(),
                max: "23".into(),
                value: hour.to_string(),
            });
        }
        if minute > 59 {
            return Err(ValidationError::OutOfRange {
                field: "minute",
                min: "0".into(),
                max: "59".into(),
                value: minute.to_string(),
            });
        }
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "time",
                message: format!("{hour}:{minute}"),
            })
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Seconds elapsed since midnight, sub-second part dropped.
    pub fn seconds_since_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    /// Subtract a duration given in seconds, wrapping across midnight.
    ///
    /// Returns `None` when `secs` is not finite or too large to represent as
    /// a [`TimeDelta`]. Negative values move the time forward.
    pub fn wrapping_sub_secs(&self, secs: f64) -> Option<Self> {
        if !secs.is_finite() {
            return None;
        }
        // Whole days do not change the time of day; reducing first keeps the
        // millisecond conversion in range for any finite input.
        let secs = secs % SECONDS_PER_DAY;
        let millis = (secs * 1000.0).round() as i64;
        let delta = TimeDelta::try_milliseconds(millis)?;
        let (time, _days) = self.0.overflowing_sub_signed(delta);
        Some(Self(time))
    }

    /// Render using the given short time style. Seconds are truncated.
    pub fn format(&self, style: TimeStyle) -> String {
        match style.resolve() {
            TimeStyle::TwentyFourHour => self.0.format("%H:%M").to_string(),
            _ => self.0.format("%-I:%M %p").to_string(),
        }
    }

    /// Parse `HH:MM` (24-hour) or `H:MM AM` (12-hour) input.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();
        let parsed = ["%H:%M", "%I:%M %p", "%I:%M%p"]
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(&normalized, fmt).ok());

        match parsed {
            Some(time) => Self::from_hm(time.hour(), time.minute()),
            None => Err(ValidationError::InvalidValue {
                field: "time",
                message: format!("expected HH:MM or H:MM AM/PM, got '{input}'"),
            }),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Short time display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeStyle {
    /// Follow the runtime locale.
    #[default]
    #[serde(rename = "auto")]
    Auto,
    /// `11:00 PM`
    #[serde(rename = "12h")]
    TwelveHour,
    /// `23:00`
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl TimeStyle {
    /// Resolve `Auto` against the process locale; other styles are returned as is.
    pub fn resolve(self) -> Self {
        match self {
            TimeStyle::Auto => Self::from_locale(&locale_from(|var| std::env::var(var).ok())),
            other => other,
        }
    }

    /// Pick the clock convention for a POSIX locale name such as `en_US.UTF-8`.
    pub fn from_locale(locale: &str) -> Self {
        let name = locale
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();

        if name.is_empty() || name == "C" || name == "POSIX" {
            return TimeStyle::TwelveHour;
        }

        let mut parts = name.split(['_', '-']);
        let language = parts.next().unwrap_or_default();
        match parts.next() {
            Some(region) if TWELVE_HOUR_REGIONS.contains(&region.to_ascii_uppercase().as_str()) => {
                TimeStyle::TwelveHour
            }
            Some(_) => TimeStyle::TwentyFourHour,
            None if language.eq_ignore_ascii_case("en") => TimeStyle::TwelveHour,
            None => TimeStyle::TwentyFourHour,
        }
    }
}

impl FromStr for TimeStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(TimeStyle::Auto),
            "12h" | "12" => Ok(TimeStyle::TwelveHour),
            "24h" | "24" => Ok(TimeStyle::TwentyFourHour),
            other => Err(ValidationError::InvalidValue {
                field: "time_style",
                message: format!("expected auto, 12h or 24h, got '{other}'"),
            }),
        }
    }
}

/// First non-empty of `LC_ALL`, `LC_TIME`, `LANG` as reported by `lookup`.
fn locale_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| lookup(*var))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}
