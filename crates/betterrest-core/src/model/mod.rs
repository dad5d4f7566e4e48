//! Sleep prediction models.
//!
//! The estimator depends only on [`SleepModel`]; the trained artifact behind
//! it is opaque. [`LinearSleepModel`] is the bundled artifact-backed
//! implementation.

mod linear;

pub use linear::{Coefficients, LinearSleepModel};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Model input features.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepFeatures {
    /// Wake time as seconds since midnight.
    pub wake: f64,
    /// Desired sleep in hours.
    pub estimated_sleep: f64,
    /// Cups of coffee per day.
    pub coffee: f64,
}

/// Model output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepPrediction {
    /// Sleep actually needed, in seconds.
    pub actual_sleep: f64,
}

/// A pre-trained regressor mapping features to required sleep.
///
/// Implementations hold no per-call state, so one loaded model can serve
/// any number of estimations, including concurrent ones.
pub trait SleepModel: Send + Sync {
    /// Evaluate the model for one feature row.
    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction, ModelError>;
}

impl<M: SleepModel + ?Sized> SleepModel for &M {
    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction, ModelError> {
        (**self).predict(features)
    }
}

impl<M: SleepModel + ?Sized> SleepModel for Box<M> {
    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction, ModelError> {
        (**self).predict(features)
    }
}
