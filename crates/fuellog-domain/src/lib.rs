//! Fuel log domain - request model, validation and the gallons allocator

pub mod model;
pub mod service;

pub use model::{AllocationSummary, FuelLog, FuelRequest, PurchaseRecord};
pub use service::{allocate, RandomSource, MIN_FILL_GALLONS};
