//! Bedtime estimation command.

use clap::Args;
use std::path::PathBuf;

use betterrest_core::{
    recommend_with, CaffeineCount, Config, SleepGoal, TimeStyle, WakeTime,
};

#[derive(Args)]
pub struct EstimateArgs {
    /// Wake-up time (HH:MM or H:MM AM/PM); defaults to config
    #[arg(long)]
    wake: Option<String>,
    /// Desired sleep in hours (4-12, quarter-hour steps)
    #[arg(long)]
    sleep: Option<f64>,
    /// Cups of coffee per day (1-19)
    #[arg(long)]
    coffee: Option<u32>,
    /// Model artifact to use instead of the configured one
    #[arg(long)]
    model: Option<PathBuf>,
    /// Time style: auto, 12h or 24h
    #[arg(long)]
    style: Option<TimeStyle>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: EstimateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let defaults = &config.defaults;

    let wake = match args.wake.as_deref() {
        Some(s) => WakeTime::parse(s)?,
        None => defaults.wake_time,
    };
    let sleep_goal = match args.sleep {
        Some(hours) => SleepGoal::new(hours)?,
        None => defaults.sleep_goal,
    };
    let coffee = match args.coffee {
        Some(cups) => CaffeineCount::new(cups)?,
        None => defaults.coffee,
    };
    let style = args.style.unwrap_or(config.display.time_style);

    tracing::info!(%wake, sleep_goal = sleep_goal.hours(), coffee = coffee.cups(), "estimating");

    let recommendation = recommend_with(
        || super::load_model(args.model.as_ref(), &config),
        wake.time(),
        sleep_goal.hours(),
        coffee.cups(),
        style,
    );

    if args.json {
        let output = serde_json::json!({
            "wake_time": wake,
            "sleep_goal": sleep_goal,
            "coffee": coffee,
            "recommendation": recommendation,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Wake up:  {}", wake.time().format(style));
        println!("Sleep:    {sleep_goal}");
        println!("Coffee:   {coffee}");
        println!();
        println!("{}", recommendation.title());
        println!("{}", recommendation.message());
    }

    if recommendation.is_error() {
        std::process::exit(1);
    }
    Ok(())
}
