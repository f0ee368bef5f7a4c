use anyhow::Result;
use clap::{Parser, Subcommand};
use time_calc::calculator::Operation;
use time_calc::commands;
use time_calc::{OutputFormat, config, logging};

#[derive(Parser)]
#[command(name = "tcalc")]
#[command(about = "Add and subtract durations written as 1h30m, 45m, 10s")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Output format (overrides config)")]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two durations
    Add {
        #[arg(allow_hyphen_values = true, help = "First duration, e.g. 1h30m")]
        first: String,
        #[arg(allow_hyphen_values = true, help = "Second duration, e.g. 45m")]
        second: String,
    },
    /// Subtract the second duration from the first
    Sub {
        #[arg(allow_hyphen_values = true, help = "First duration, e.g. 1h")]
        first: String,
        #[arg(allow_hyphen_values = true, help = "Second duration, e.g. 1h30m")]
        second: String,
    },
    /// Apply an operation chosen with --op
    Calc {
        #[arg(allow_hyphen_values = true, help = "First duration, e.g. 2h")]
        first: String,
        #[arg(allow_hyphen_values = true, help = "Second duration, e.g. 15m")]
        second: String,
        #[arg(long, value_enum, default_value = "add")]
        op: Operation,
    },
    /// Print the total seconds of a duration
    Seconds {
        #[arg(allow_hyphen_values = true, help = "Duration, e.g. 1h2m3s")]
        duration: String,
    },
    /// Print a second count as a duration
    Format {
        #[arg(allow_negative_numbers = true, help = "Seconds, may be negative")]
        seconds: i64,
    },
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
    Set { key: String, value: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load().unwrap_or_else(|err| {
        eprintln!("Warning: Ignoring config file: {:#}", err);
        config::Config::default()
    });
    logging::init(&config.logging)?;

    let format = cli.format.unwrap_or(config.output.format);

    match &cli.command {
        Commands::Add { first, second } => {
            commands::calc::calc(&config, first, second, Operation::Add, format)?;
        }
        Commands::Sub { first, second } => {
            commands::calc::calc(&config, first, second, Operation::Subtract, format)?;
        }
        Commands::Calc { first, second, op } => {
            commands::calc::calc(&config, first, second, *op, format)?;
        }
        Commands::Seconds { duration } => {
            commands::calc::seconds(duration, format)?;
        }
        Commands::Format { seconds } => {
            commands::calc::format_secs(*seconds, format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
            ConfigAction::Set { key, value } => commands::config::set(key, value, &config)?,
        },
    }

    Ok(())
}
