//! User-facing result of a bedtime calculation.

use serde::Serialize;

use crate::error::{EstimationError, MODEL_FAILURE_MESSAGE};
use crate::time::{TimeOfDay, TimeStyle};

pub const BEDTIME_TITLE: &str = "Your ideal bedtime is...";
pub const ERROR_TITLE: &str = "Error";

/// What gets shown after a calculation: a bedtime or the fixed error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BedtimeRecommendation {
    Bedtime {
        title: String,
        /// Formatted short time, e.g. `11:00 PM`.
        bedtime: String,
        time: TimeOfDay,
    },
    Error {
        title: String,
        message: String,
    },
}

impl BedtimeRecommendation {
    pub fn bedtime(time: TimeOfDay, style: TimeStyle) -> Self {
        BedtimeRecommendation::Bedtime {
            title: BEDTIME_TITLE.to_string(),
            bedtime: time.format(style),
            time,
        }
    }

    pub fn model_failure() -> Self {
        BedtimeRecommendation::Error {
            title: ERROR_TITLE.to_string(),
            message: MODEL_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn from_result(result: Result<TimeOfDay, EstimationError>, style: TimeStyle) -> Self {
        match result {
            Ok(time) => Self::bedtime(time, style),
            Err(err) => BedtimeRecommendation::Error {
                title: ERROR_TITLE.to_string(),
                message: err.user_message().to_string(),
            },
        }
    }

    pub fn title(&self) -> &str {
        match self {
            BedtimeRecommendation::Bedtime { title, .. } => title,
            BedtimeRecommendation::Error { title, .. } => title,
        }
    }

    /// The formatted bedtime, or the error message.
    pub fn message(&self) -> &str {
        match self {
            BedtimeRecommendation::Bedtime { bedtime, .. } => bedtime,
            BedtimeRecommendation::Error { message, .. } => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, BedtimeRecommendation::Error { .. })
    }
}
