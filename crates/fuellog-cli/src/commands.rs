//! Command handlers

use crate::cli::{Cli, Commands};
use chrono::NaiveDate;
use fuellog_app::config::Config;
use fuellog_app::form::{parse_stations, FormInput};
use fuellog_app::report::render;
use fuellog_domain::{allocate, FuelLog, FuelRequest};
use fuellog_types::{Error, OutputFormat, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(ref path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Generate {
            start,
            end,
            capacity,
            total,
            stations,
            stations_file,
            seed,
        } => {
            let input = FormInput {
                start_date: start
                    .clone()
                    .unwrap_or_else(|| config.default_start_date.to_string()),
                end_date: end
                    .clone()
                    .unwrap_or_else(|| config.default_end_date.to_string()),
                max_tank_capacity: capacity
                    .clone()
                    .unwrap_or_else(|| config.max_tank_capacity.to_string()),
                total_gallons: total
                    .clone()
                    .unwrap_or_else(|| config.total_gallons.to_string()),
                stations: station_text(&config, stations, stations_file.as_deref())?,
            };
            cmd_generate(&input, *seed, output_format, cli.verbose)
        }

        Commands::Config {
            show,
            set_start,
            set_end,
            set_capacity,
            set_total,
            add_station,
            clear_stations,
            set_output,
            reset,
        } => cmd_config(
            &config_path,
            config,
            ConfigUpdate {
                show: *show,
                set_start: set_start.clone(),
                set_end: set_end.clone(),
                set_capacity: *set_capacity,
                set_total: *set_total,
                add_station: add_station.clone(),
                clear_stations: *clear_stations,
                set_output: *set_output,
                reset: *reset,
            },
        ),
    }
}

/// Station lines from the file and `--station` flags, or the configured list
/// when neither was given.
fn station_text(config: &Config, flags: &[String], file: Option<&Path>) -> Result<String> {
    if flags.is_empty() && file.is_none() {
        return Ok(config.stations.join("\n"));
    }

    let mut lines = Vec::new();
    if let Some(path) = file {
        if !path.exists() {
            return Err(Error::InvalidArgument(format!(
                "Stations file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        lines.extend(parse_stations(&content));
    }
    lines.extend(flags.iter().cloned());
    Ok(lines.join("\n"))
}

fn cmd_generate(
    input: &FormInput,
    seed: Option<u64>,
    output_format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let request = input.to_request()?;
    debug!(?seed, "generating log");

    let log = run_allocation(&request, seed);

    if verbose {
        print_summary(&log);
    }
    let rendered = render(&log, output_format)?;
    if !rendered.is_empty() {
        print!("{}", rendered);
        if !rendered.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}

fn run_allocation(request: &FuelRequest, seed: Option<u64>) -> FuelLog {
    match seed {
        Some(seed) => allocate(request, &mut StdRng::seed_from_u64(seed)),
        None => allocate(request, &mut rand::thread_rng()),
    }
}

fn print_summary(log: &FuelLog) {
    let summary = log.summary();
    eprintln!("Purchases:      {}", summary.purchase_count);
    eprintln!("Day span:       {}", summary.day_span);
    eprintln!("Iterations:     {}", summary.iterations);
    eprintln!("Allocated:      {:.3} gal", summary.allocated_total);
    eprintln!(
        "Converged:      {}",
        if summary.converged { "yes" } else { "no (iteration cap)" }
    );
}

/// Requested changes from the `config` subcommand
struct ConfigUpdate {
    show: bool,
    set_start: Option<String>,
    set_end: Option<String>,
    set_capacity: Option<f64>,
    set_total: Option<f64>,
    add_station: Vec<String>,
    clear_stations: bool,
    set_output: Option<OutputFormat>,
    reset: bool,
}

fn cmd_config(path: &Path, mut config: Config, update: ConfigUpdate) -> Result<()> {
    if update.reset {
        let config = Config::default();
        config.save_to(path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut modified = false;

    if let Some(start) = update.set_start {
        config.default_start_date = parse_date_arg(&start)?;
        modified = true;
    }

    if let Some(end) = update.set_end {
        config.default_end_date = parse_date_arg(&end)?;
        modified = true;
    }

    if let Some(capacity) = update.set_capacity {
        config.max_tank_capacity = capacity;
        modified = true;
    }

    if let Some(total) = update.set_total {
        config.total_gallons = total;
        modified = true;
    }

    if update.clear_stations {
        config.stations.clear();
        modified = true;
    }

    if !update.add_station.is_empty() {
        let added = parse_stations(&update.add_station.join("\n"));
        config.stations.extend(added);
        modified = true;
    }

    if let Some(output_format) = update.set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save_to(path)?;
        println!("Configuration updated");
    }

    if update.show || !modified {
        println!("{}", config);
    }

    Ok(())
}

fn parse_date_arg(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidArgument(format!("Expected a YYYY-MM-DD date, got '{}'", s)))
}
