pub mod config;
pub mod estimate;
pub mod inputs;
pub mod model;

use std::path::PathBuf;

use betterrest_core::{Config, LinearSleepModel, ModelError};

/// Load the model from `--model` if given, otherwise from config.
pub(crate) fn load_model(
    override_path: Option<&PathBuf>,
    config: &Config,
) -> Result<LinearSleepModel, ModelError> {
    match override_path {
        Some(path) => LinearSleepModel::load(path),
        None => config.load_model(),
    }
}
