use clap::{ArgAction, Parser, Subcommand};

use betterrest_core::logging::init_logging;
use betterrest_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "betterrest-cli", version, about = "BetterRest CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a bedtime
    Estimate(commands::estimate::EstimateArgs),
    /// List the selectable sleep goals and coffee amounts
    Inputs,
    /// Inspect the sleep model
    Model {
        #[command(subcommand)]
        action: commands::model::ModelAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = Config::load_or_default();
    if let Err(e) = init_logging(cli.verbose, &config.logging.level) {
        eprintln!("warning: logging disabled: {e}");
    }

    let result = match cli.command {
        Commands::Estimate(args) => commands::estimate::run(args),
        Commands::Inputs => commands::inputs::run(),
        Commands::Model { action } => commands::model::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
