//! Validated generation request

use chrono::NaiveDate;
use fuellog_types::ValidationError;
use serde::Serialize;

/// Parameters for one log generation.
///
/// Only constructible through [`FuelRequest::new`], so a value of this type
/// always satisfies the range checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelRequest {
    start_date: NaiveDate,
    end_date: NaiveDate,
    max_tank_capacity: f64,
    total_gallons: f64,
    stations: Vec<String>,
}

impl FuelRequest {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        max_tank_capacity: f64,
        total_gallons: f64,
        stations: Vec<String>,
    ) -> Result<Self, ValidationError> {
        if end_date <= start_date {
            return Err(ValidationError::EndNotAfterStart);
        }
        if !is_positive(max_tank_capacity) {
            return Err(ValidationError::NonPositiveCapacity);
        }
        if !is_positive(total_gallons) {
            return Err(ValidationError::NonPositiveTotal);
        }
        if stations.is_empty() {
            return Err(ValidationError::NoStations);
        }
        if total_gallons < max_tank_capacity {
            return Err(ValidationError::TotalBelowCapacity);
        }

        Ok(Self {
            start_date,
            end_date,
            max_tank_capacity,
            total_gallons,
            stations,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn max_tank_capacity(&self) -> f64 {
        self.max_tank_capacity
    }

    pub fn total_gallons(&self) -> f64 {
        self.total_gallons
    }

    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Whole days between start and end; at least 1
    pub fn day_span(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

// NaN and infinities are rejected along with zero and negatives.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn stations() -> Vec<String> {
        vec!["Shell".to_string(), "BP".to_string()]
    }

    #[test]
    fn test_valid_request() {
        let req = FuelRequest::new(date("2024-07-01"), date("2025-06-30"), 26.0, 2450.0, stations())
            .unwrap();
        assert_eq!(req.day_span(), 364);
        assert_eq!(req.stations().len(), 2);
    }

    #[test]
    fn test_end_before_start() {
        let err = FuelRequest::new(date("2025-01-01"), date("2024-01-01"), 26.0, 2450.0, stations())
            .unwrap_err();
        assert_eq!(err, ValidationError::EndNotAfterStart);
        assert_eq!(err.to_string(), "End Date must be after Start Date.");
    }

    #[test]
    fn test_same_day_rejected() {
        let err = FuelRequest::new(date("2024-07-01"), date("2024-07-01"), 26.0, 2450.0, stations())
            .unwrap_err();
        assert_eq!(err, ValidationError::EndNotAfterStart);
    }

    #[test]
    fn test_non_positive_capacity() {
        for cap in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = FuelRequest::new(date("2024-07-01"), date("2024-08-01"), cap, 100.0, stations())
                .unwrap_err();
            assert_eq!(err, ValidationError::NonPositiveCapacity);
        }
    }

    #[test]
    fn test_non_positive_total() {
        let err = FuelRequest::new(date("2024-07-01"), date("2024-08-01"), 26.0, 0.0, stations())
            .unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveTotal);
    }

    #[test]
    fn test_no_stations() {
        let err = FuelRequest::new(date("2024-07-01"), date("2024-08-01"), 26.0, 100.0, Vec::new())
            .unwrap_err();
        assert_eq!(err, ValidationError::NoStations);
        assert_eq!(err.to_string(), "Please enter at least one gas station.");
    }

    #[test]
    fn test_total_below_capacity() {
        let err = FuelRequest::new(date("2024-07-01"), date("2024-08-01"), 26.0, 10.0, stations())
            .unwrap_err();
        assert_eq!(err, ValidationError::TotalBelowCapacity);
    }

    #[test]
    fn test_total_equal_to_capacity_accepted() {
        assert!(FuelRequest::new(date("2024-07-01"), date("2024-08-01"), 26.0, 26.0, stations()).is_ok());
    }

    #[test]
    fn test_check_order_dates_first() {
        // Every other field is invalid too; the date check reports first.
        let err = FuelRequest::new(date("2024-08-01"), date("2024-07-01"), -1.0, -1.0, Vec::new())
            .unwrap_err();
        assert_eq!(err, ValidationError::EndNotAfterStart);
    }
}
