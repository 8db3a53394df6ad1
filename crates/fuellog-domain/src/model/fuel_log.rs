//! Generated log and allocation diagnostics

use serde::{Deserialize, Serialize};

use super::PurchaseRecord;

/// How the allocator arrived at a log.
///
/// `allocated_total` is the unrounded sum after the correction loop, so it is
/// the value to compare against the requested total. `converged` is false when
/// the iteration cap was hit first; the log is still usable in that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationSummary {
    pub purchase_count: usize,
    pub day_span: i64,
    pub iterations: u32,
    pub allocated_total: f64,
    pub converged: bool,
}

/// Purchase records sorted by date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelLog {
    records: Vec<PurchaseRecord>,
    summary: AllocationSummary,
}

impl FuelLog {
    /// Build a log, ordering records by date. Equal dates keep their relative order.
    pub fn new(mut records: Vec<PurchaseRecord>, summary: AllocationSummary) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records, summary }
    }

    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }

    pub fn summary(&self) -> &AllocationSummary {
        &self.summary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of the rounded gallons, as shown in a table footer
    pub fn total_gallons(&self) -> f64 {
        self.records.iter().map(|r| r.gallons).sum()
    }
}
