//! Form input parsing and the state behind the generate action

use chrono::NaiveDate;
use fuellog_domain::{allocate, FuelLog, FuelRequest, RandomSource};
use fuellog_types::ValidationError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw form fields, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    pub start_date: String,
    pub end_date: String,
    pub max_tank_capacity: String,
    pub total_gallons: String,
    /// One station per line
    pub stations: String,
}

impl FormInput {
    /// Form pre-filled from configuration defaults
    pub fn from_config(config: &Config) -> Self {
        Self {
            start_date: config.default_start_date.format(DATE_FORMAT).to_string(),
            end_date: config.default_end_date.format(DATE_FORMAT).to_string(),
            max_tank_capacity: config.max_tank_capacity.to_string(),
            total_gallons: config.total_gallons.to_string(),
            stations: config.stations.join("\n"),
        }
    }

    /// Validate the fields and build a request.
    ///
    /// An unparsable number is reported the same way as a non-positive one.
    pub fn to_request(&self) -> Result<FuelRequest, ValidationError> {
        let (start, end) = match (parse_date(&self.start_date), parse_date(&self.end_date)) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(ValidationError::InvalidDates),
        };

        FuelRequest::new(
            start,
            end,
            parse_number(&self.max_tank_capacity),
            parse_number(&self.total_gallons),
            parse_stations(&self.stations),
        )
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

fn parse_number(s: &str) -> f64 {
    s.trim().parse().unwrap_or(f64::NAN)
}

/// Split station text into names: one per line, trimmed, blank lines dropped
pub fn parse_stations(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Mutable state of the generator form.
///
/// The last generated log survives a rejected attempt; only a successful
/// generation replaces it.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub input: FormInput,
    log: Option<FuelLog>,
    error: Option<String>,
}

impl FormState {
    pub fn new(input: FormInput) -> Self {
        Self {
            input,
            log: None,
            error: None,
        }
    }

    /// Run the generate action against the current input
    pub fn generate<R: RandomSource>(&mut self, rng: &mut R) {
        self.error = None;

        match self.input.to_request() {
            Ok(request) => {
                let log = allocate(&request, rng);
                info!(
                    purchases = log.len(),
                    total = log.total_gallons(),
                    "fuel log generated"
                );
                self.log = Some(log);
            }
            Err(e) => {
                debug!(error = %e, "form rejected");
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn log(&self) -> Option<&FuelLog> {
        self.log.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn valid_input() -> FormInput {
        FormInput {
            start_date: "2024-07-01".to_string(),
            end_date: "2025-06-30".to_string(),
            max_tank_capacity: "26".to_string(),
            total_gallons: "2450".to_string(),
            stations: "Shell, 721 N Tucker Blvd\nBP, 1815 Arsenal".to_string(),
        }
    }

    // ==========================================
    // Station parsing
    // ==========================================

    #[test]
    fn test_parse_stations_trims_and_skips_blank_lines() {
        let stations = parse_stations("  Shell  \n\n   \nBP\r\n\tZX\t\n");
        assert_eq!(stations, vec!["Shell", "BP", "ZX"]);
    }

    #[test]
    fn test_parse_stations_empty() {
        assert!(parse_stations("").is_empty());
        assert!(parse_stations("\n  \n").is_empty());
    }

    // ==========================================
    // Request building
    // ==========================================

    #[test]
    fn test_to_request_valid() {
        let request = valid_input().to_request().unwrap();
        assert_eq!(request.day_span(), 364);
        assert_eq!(request.max_tank_capacity(), 26.0);
        assert_eq!(request.stations(), ["Shell, 721 N Tucker Blvd", "BP, 1815 Arsenal"]);
    }

    #[test]
    fn test_to_request_trims_fields() {
        let mut input = valid_input();
        input.start_date = " 2024-07-01 ".to_string();
        input.total_gallons = " 2450.5 ".to_string();
        let request = input.to_request().unwrap();
        assert_eq!(request.total_gallons(), 2450.5);
    }

    #[test]
    fn test_unparsable_dates() {
        let mut input = valid_input();
        input.end_date = "June 30".to_string();
        assert_eq!(input.to_request().unwrap_err(), ValidationError::InvalidDates);

        let mut input = valid_input();
        input.start_date = String::new();
        assert_eq!(input.to_request().unwrap_err(), ValidationError::InvalidDates);
    }

    #[test]
    fn test_end_before_start() {
        let mut input = valid_input();
        input.start_date = "2025-01-01".to_string();
        input.end_date = "2024-01-01".to_string();
        let err = input.to_request().unwrap_err();
        assert_eq!(err.to_string(), "End Date must be after Start Date.");
    }

    #[test]
    fn test_unparsable_capacity_is_not_positive() {
        let mut input = valid_input();
        input.max_tank_capacity = "lots".to_string();
        assert_eq!(input.to_request().unwrap_err(), ValidationError::NonPositiveCapacity);
    }

    #[test]
    fn test_negative_total() {
        let mut input = valid_input();
        input.total_gallons = "-5".to_string();
        assert_eq!(input.to_request().unwrap_err(), ValidationError::NonPositiveTotal);
    }

    #[test]
    fn test_empty_stations() {
        let mut input = valid_input();
        input.stations = String::new();
        let err = input.to_request().unwrap_err();
        assert_eq!(err.to_string(), "Please enter at least one gas station.");
    }

    #[test]
    fn test_total_below_capacity() {
        let mut input = valid_input();
        input.total_gallons = "10".to_string();
        assert_eq!(input.to_request().unwrap_err(), ValidationError::TotalBelowCapacity);
    }

    #[test]
    fn test_from_config_round_trips() {
        let config = Config::default();
        let request = FormInput::from_config(&config).to_request().unwrap();
        assert_eq!(request.start_date(), config.default_start_date);
        assert_eq!(request.end_date(), config.default_end_date);
        assert_eq!(request.total_gallons(), config.total_gallons);
        assert_eq!(request.stations(), config.stations.as_slice());
    }

    // ==========================================
    // Form state
    // ==========================================

    #[test]
    fn test_generate_sets_log() {
        let mut state = FormState::new(valid_input());
        let mut rng = StdRng::seed_from_u64(1);
        state.generate(&mut rng);

        assert!(state.error().is_none());
        let log = state.log().unwrap();
        assert!(!log.is_empty());
    }

    #[test]
    fn test_rejection_keeps_previous_log() {
        let mut state = FormState::new(valid_input());
        let mut rng = StdRng::seed_from_u64(1);
        state.generate(&mut rng);
        let before = state.log().cloned();

        state.input.start_date = "2025-01-01".to_string();
        state.input.end_date = "2024-01-01".to_string();
        state.generate(&mut rng);

        assert_eq!(state.error(), Some("End Date must be after Start Date."));
        assert_eq!(state.log().cloned(), before);
    }

    #[test]
    fn test_success_clears_error() {
        let mut input = valid_input();
        input.stations = String::new();
        let mut state = FormState::new(input);
        let mut rng = StdRng::seed_from_u64(1);

        state.generate(&mut rng);
        assert!(state.error().is_some());
        assert!(state.log().is_none());

        state.input.stations = "Shell".to_string();
        state.generate(&mut rng);
        assert!(state.error().is_none());
        assert!(state.log().is_some());
    }
}
