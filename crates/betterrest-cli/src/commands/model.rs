//! Sleep model inspection.

use clap::Subcommand;
use std::path::PathBuf;

use betterrest_core::{Config, SleepFeatures, SleepModel, WakeTime};

#[derive(Subcommand)]
pub enum ModelAction {
    /// Show the model artifact's weights
    Show {
        /// Model artifact to use instead of the configured one
        #[arg(long)]
        model: Option<PathBuf>,
    },
    /// Print the raw predicted sleep need
    Predict {
        /// Model artifact to use instead of the configured one
        #[arg(long)]
        model: Option<PathBuf>,
        /// Wake-up time (HH:MM)
        #[arg(long)]
        wake: String,
        /// Desired sleep in hours, passed to the model unchecked
        #[arg(long, allow_negative_numbers = true)]
        sleep: f64,
        /// Cups of coffee per day, passed to the model unchecked
        #[arg(long)]
        coffee: u32,
    },
}

pub fn run(action: ModelAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    match action {
        ModelAction::Show { model } => {
            let model = super::load_model(model.as_ref(), &config)?;
            println!("name:            {}", model.name);
            println!("intercept:       {}", model.intercept);
            println!("wake:            {}", model.coefficients.wake);
            println!("estimated_sleep: {}", model.coefficients.estimated_sleep);
            println!("coffee:          {}", model.coefficients.coffee);
        }
        ModelAction::Predict {
            model,
            wake,
            sleep,
            coffee,
        } => {
            let model = super::load_model(model.as_ref(), &config)?;
            let wake = WakeTime::parse(&wake)?.time();
            let features = SleepFeatures {
                wake: f64::from(wake.seconds_since_midnight()),
                estimated_sleep: sleep,
                coffee: f64::from(coffee),
            };
            let prediction = model.predict(&features)?;
            let total_minutes = (prediction.actual_sleep / 60.0).round() as i64;
            let sign = if total_minutes < 0 { "-" } else { "" };
            let minutes = total_minutes.unsigned_abs();
            println!(
                "actual_sleep: {:.0}s ({sign}{}h {:02}m)",
                prediction.actual_sleep,
                minutes / 60,
                minutes % 60
            );
        }
    }
    Ok(())
}
