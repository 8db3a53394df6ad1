//! Configuration management for fuel-log
//!
//! Config stored at: ~/.config/fuel-log/config.json
//!
//! Holds the values the form starts with. Command-line flags override them
//! per invocation; the GUI pre-fills its fields from them.

use chrono::NaiveDate;
use fuellog_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// First day of the generated log
    #[serde(default = "default_start_date")]
    pub default_start_date: NaiveDate,

    /// Last day of the generated log
    #[serde(default = "default_end_date")]
    pub default_end_date: NaiveDate,

    /// Largest single fill (gallons)
    #[serde(default = "default_max_tank_capacity")]
    pub max_tank_capacity: f64,

    /// Gallons the whole log should add up to
    #[serde(default = "default_total_gallons")]
    pub total_gallons: f64,

    /// Station names offered to the allocator
    #[serde(default = "default_stations")]
    pub stations: Vec<String>,

    /// Default output format (table, json, csv)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 1).unwrap_or_default()
}

fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default()
}

fn default_max_tank_capacity() -> f64 {
    26.0
}

fn default_total_gallons() -> f64 {
    2450.0
}

fn default_stations() -> Vec<String> {
    [
        "Circle K, 35 S Grand Blvd, St Louis, Missouri, 63103",
        "BP, 1815 Arsenal, St Louis, Missouri, 63118",
        "Moto, 3120 Mississippi Ave, Sauget, Illinois, 6220",
        "Love's, 6124 N Broadway, St Louis, Missouri, 63147",
        "Circle K, 1514 Hampton Ave, St Louis, Missouri, 63139",
        "Zoom, 1300 N Tucker Blvd, St. Louis, Missouri, 63106",
        "ZX, 1007 S Broadway, St Louis, Missouri, 63103",
        "Shell, 721 N Tucker Blvd, St Louis, Missouri, 63101",
        "QuikTrip, 2600 Chouteau Ave, St Louis, Missouri, 63103",
        "Phillips 66, 1655 S Jefferson Ave, St Louis, Missouri, 63104",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_start_date: default_start_date(),
            default_end_date: default_end_date(),
            max_tank_capacity: default_max_tank_capacity(),
            total_gallons: default_total_gallons(),
            stations: default_stations(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fuel-log");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or fall back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fuel Log Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Start date:     {}", self.default_start_date)?;
        writeln!(f, "End date:       {}", self.default_end_date)?;
        writeln!(f, "Tank capacity:  {:.1} gal", self.max_tank_capacity)?;
        writeln!(f, "Total gallons:  {:.1} gal", self.total_gallons)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Stations:       {}", self.stations.len())?;
        for station in &self.stations {
            writeln!(f, "  - {}", station)?;
        }

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
