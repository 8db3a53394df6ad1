//! CLI definition using clap

use clap::{Parser, Subcommand};
use fuellog_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fuel-log")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Generate a synthetic fuel purchase log for a gallons total")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file override (default: ~/.config/fuel-log/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json, csv). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a purchase log
    Generate {
        /// First day of the log (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Last day of the log (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// Max tank capacity in gallons
        #[arg(long)]
        capacity: Option<String>,

        /// Total gallons the log should add up to
        #[arg(long)]
        total: Option<String>,

        /// Gas station (repeatable). Replaces configured stations.
        #[arg(long = "station", short = 's')]
        stations: Vec<String>,

        /// Text file with one gas station per line
        #[arg(long)]
        stations_file: Option<PathBuf>,

        /// Seed for repeatable output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default start date (YYYY-MM-DD)
        #[arg(long)]
        set_start: Option<String>,

        /// Set default end date (YYYY-MM-DD)
        #[arg(long)]
        set_end: Option<String>,

        /// Set default max tank capacity
        #[arg(long)]
        set_capacity: Option<f64>,

        /// Set default total gallons
        #[arg(long)]
        set_total: Option<f64>,

        /// Add a default gas station (repeatable)
        #[arg(long)]
        add_station: Vec<String>,

        /// Remove all default gas stations
        #[arg(long)]
        clear_stations: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
