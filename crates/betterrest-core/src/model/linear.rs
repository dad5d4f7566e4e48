//! Linear regression sleep model loaded from a TOML or JSON artifact.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{SleepFeatures, SleepModel, SleepPrediction};
use crate::error::ModelError;

/// Per-feature weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub wake: f64,
    pub estimated_sleep: f64,
    pub coffee: f64,
}

/// `actual_sleep = intercept + wake*w0 + estimated_sleep*w1 + coffee*w2`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSleepModel {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub intercept: f64,
    pub coefficients: Coefficients,
}

fn default_name() -> String {
    "SleepCalculator".into()
}

impl LinearSleepModel {
    pub fn new(intercept: f64, coefficients: Coefficients) -> Self {
        Self {
            name: default_name(),
            intercept,
            coefficients,
        }
    }

    /// Load an artifact. Files ending in `.json` are read as JSON, anything
    /// else as TOML.
    ///
    /// # Errors
    ///
    /// `ModelError::Load` if the file cannot be read, `ModelError::Parse` if
    /// it is malformed or carries non-finite weights.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let model = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::debug!(path = %path.display(), name = %model.name, "loaded sleep model");
        Ok(model)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ModelError> {
        let model: Self = toml::from_str(content).map_err(|e| ModelError::Parse(e.to_string()))?;
        model.validate()
    }

    pub fn from_json_str(content: &str) -> Result<Self, ModelError> {
        let model: Self =
            serde_json::from_str(content).map_err(|e| ModelError::Parse(e.to_string()))?;
        model.validate()
    }

    fn validate(self) -> Result<Self, ModelError> {
        let c = &self.coefficients;
        let weights = [self.intercept, c.wake, c.estimated_sleep, c.coffee];
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(ModelError::Parse(format!(
                "model '{}' has non-finite weights",
                self.name
            )));
        }
        Ok(self)
    }
}

impl SleepModel for LinearSleepModel {
    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction, ModelError> {
        let c = &self.coefficients;
        let actual_sleep = self.intercept
            + c.wake * features.wake
            + c.estimated_sleep * features.estimated_sleep
            + c.coffee * features.coffee;

        if !actual_sleep.is_finite() {
            return Err(ModelError::Inference(format!(
                "non-finite prediction for {features:?}"
            )));
        }
        Ok(SleepPrediction { actual_sleep })
    }
}
