//! Gallons allocation
//!
//! Spreads a requested total over a number of randomly dated purchases, each
//! bounded by the minimum fill and the tank capacity. Amounts are drawn at
//! random, scaled toward the target, and then nudged by an even share of the
//! remaining difference until the sum is within tolerance or the iteration cap
//! is reached. Hitting the cap is not an error; the closest sum found is kept.

use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};

use super::RandomSource;
use crate::model::{AllocationSummary, FuelLog, FuelRequest, PurchaseRecord};

/// Smallest realistic fill amount
pub const MIN_FILL_GALLONS: f64 = 5.0;

/// Largest accepted gap between the requested and allocated totals
pub const CONVERGENCE_TOLERANCE: f64 = 0.1;

pub const MAX_CORRECTION_ITERATIONS: u32 = 100;

/// Fill amounts before rounding, with how the correction loop ended
struct Distribution {
    gallons: Vec<f64>,
    iterations: u32,
    total: f64,
}

/// Generate a purchase log for `request`.
pub fn allocate<R: RandomSource>(request: &FuelRequest, rng: &mut R) -> FuelLog {
    let capacity = request.max_tank_capacity();
    let target = request.total_gallons();
    let day_span = request.day_span();
    let count = purchase_count(target, capacity, day_span);
    let repeated_dates = count as i64 > day_span + 1;

    debug!(purchases = count, day_span, repeated_dates, "allocating fuel log");

    let dates = select_dates(request.start_date(), day_span, count, rng);
    let distribution = distribute_gallons(count, target, capacity, rng);

    let converged = (target - distribution.total).abs() <= CONVERGENCE_TOLERANCE;
    if converged {
        debug!(iterations = distribution.iterations, total = distribution.total, "allocation converged");
    } else {
        warn!(
            iterations = distribution.iterations,
            total = distribution.total,
            target,
            "allocation stopped at iteration cap"
        );
    }

    let records = dates
        .into_iter()
        .zip(distribution.gallons.iter())
        .map(|(date, &gallons)| PurchaseRecord {
            date,
            gallons: round_fill(gallons, capacity),
            // stations is non-empty for any FuelRequest
            station: rng.choice(request.stations()).cloned().unwrap_or_default(),
        })
        .collect();

    FuelLog::new(
        records,
        AllocationSummary {
            purchase_count: count,
            day_span,
            iterations: distribution.iterations,
            allocated_total: distribution.total,
            converged,
        },
    )
}

/// Number of purchases for a target total.
///
/// Starts from the count an average fill would need, caps it at one purchase
/// per day, then raises it to the minimum the tank size physically requires.
pub fn purchase_count(total_gallons: f64, max_tank_capacity: f64, day_span: i64) -> usize {
    let avg_fill = (MIN_FILL_GALLONS + max_tank_capacity) / 2.0;
    let estimated = (total_gallons / avg_fill).ceil() as i64;
    let required = (total_gallons / max_tank_capacity).ceil() as i64;

    estimated.min(day_span).max(required).max(1) as usize
}

/// Pick `count` sorted dates from `start..=start + day_span`.
///
/// Dates are distinct while there are enough days; past that they are drawn
/// with replacement.
fn select_dates<R: RandomSource>(
    start: NaiveDate,
    day_span: i64,
    count: usize,
    rng: &mut R,
) -> Vec<NaiveDate> {
    let available = (day_span + 1) as usize;

    let mut offsets: Vec<usize> = if count <= available {
        // Partial Fisher-Yates over the day offsets
        let mut pool: Vec<usize> = (0..available).collect();
        for i in 0..count {
            let j = i + rng.index(available - i);
            pool.swap(i, j);
        }
        pool.truncate(count);
        pool
    } else {
        (0..count).map(|_| rng.index(available)).collect()
    };

    offsets.sort_unstable();
    offsets
        .into_iter()
        .map(|offset| start + Duration::days(offset as i64))
        .collect()
}

fn distribute_gallons<R: RandomSource>(
    count: usize,
    target: f64,
    capacity: f64,
    rng: &mut R,
) -> Distribution {
    // A tank smaller than the minimum fill is always filled to capacity.
    let floor = MIN_FILL_GALLONS.min(capacity);

    let raw: Vec<f64> = (0..count).map(|_| rng.uniform(floor, capacity)).collect();
    let raw_total: f64 = raw.iter().sum();
    let scale = target / raw_total;

    let mut gallons: Vec<f64> = raw
        .iter()
        .map(|g| (g * scale).clamp(floor, capacity))
        .collect();
    let mut total: f64 = gallons.iter().sum();

    let mut iterations = 0;
    while (target - total).abs() > CONVERGENCE_TOLERANCE && iterations < MAX_CORRECTION_ITERATIONS {
        let share = (target - total) / count as f64;
        for g in gallons.iter_mut() {
            *g = (*g + share).clamp(floor, capacity);
        }
        total = gallons.iter().sum();
        iterations += 1;
    }

    Distribution {
        gallons,
        iterations,
        total,
    }
}

/// Round to one decimal without leaving the tank capacity.
fn round_fill(gallons: f64, capacity: f64) -> f64 {
    let rounded = (gallons * 10.0).round() / 10.0;
    if rounded > capacity {
        (gallons * 10.0).floor() / 10.0
    } else {
        rounded
    }
}
