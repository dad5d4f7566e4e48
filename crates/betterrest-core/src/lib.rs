//! # BetterRest Core Library
//!
//! Recommends a bedtime from a desired wake-up time, a sleep goal and daily
//! coffee intake. A pre-trained regression model predicts how much sleep is
//! actually needed; the bedtime is the wake time minus that prediction,
//! wrapped to a time of day.
//!
//! All logic lives here. The `betterrest-cli` binary is a thin layer that
//! collects inputs and prints the result.
//!
//! ## Key Components
//!
//! - [`BedtimeEstimator`]: the estimation call, generic over the model
//! - [`SleepModel`]: the narrow prediction interface; [`LinearSleepModel`]
//!   is the artifact-backed implementation
//! - [`SleepGoal`], [`CaffeineCount`], [`WakeTime`]: bounded form inputs
//! - [`BedtimeRecommendation`]: what the user is shown
//! - [`Config`]: TOML configuration

pub mod error;
pub mod estimator;
pub mod inputs;
pub mod logging;
pub mod model;
pub mod recommendation;
pub mod storage;
pub mod time;

pub use error::{ConfigError, CoreError, EstimationError, ModelError, ValidationError};
pub use estimator::{recommend_with, BedtimeEstimator};
pub use inputs::{CaffeineCount, SleepGoal, WakeTime};
pub use model::{Coefficients, LinearSleepModel, SleepFeatures, SleepModel, SleepPrediction};
pub use recommendation::BedtimeRecommendation;
pub use storage::Config;
pub use time::{TimeOfDay, TimeStyle};
