use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One fabricated fuel purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub date: NaiveDate,
    /// Fill amount, rounded to one decimal
    pub gallons: f64,
    pub station: String,
}
