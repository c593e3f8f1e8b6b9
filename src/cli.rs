//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::api::AdvisoryForm;

/// Weather advisory service - rule-based guidance for outdoor plans
#[derive(Debug, Parser)]
#[command(name = "weather-advisory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP service
    Serve(ServeArgs),

    /// Evaluate a single advisory and print it
    Advise(AdviseArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on, overrides the configured one
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Raw readings, parsed the same way as form submissions
#[derive(Debug, Args)]
pub struct AdviseArgs {
    /// Temperature in Celsius
    #[arg(short, long, allow_hyphen_values = true)]
    pub temperature: Option<String>,

    /// Relative humidity in percent
    #[arg(short = 'u', long)]
    pub humidity: Option<String>,

    /// Wind speed in km/h
    #[arg(short, long)]
    pub wind_speed: Option<String>,

    /// outdoor_sports, travel or daily_commute
    #[arg(short, long)]
    pub activity: Option<String>,

    /// Month (1-12), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Hour of day (0-23), defaults to the current hour
    #[arg(short = 'H', long)]
    pub hour: Option<String>,

    /// Precipitation in mm
    #[arg(short, long)]
    pub precipitation: Option<String>,

    /// Print the advisory as JSON instead of a text summary
    #[arg(long)]
    pub json: bool,
}

impl From<AdviseArgs> for AdvisoryForm {
    fn from(args: AdviseArgs) -> Self {
        Self {
            temperature: args.temperature,
            humidity: args.humidity,
            wind_speed: args.wind_speed,
            activity: args.activity,
            month: args.month,
            hour: args.hour,
            precipitation: args.precipitation,
        }
    }
}
