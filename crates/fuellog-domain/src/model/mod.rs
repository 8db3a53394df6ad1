//! Domain model types

pub mod fuel_log;
pub mod purchase;
pub mod request;

pub use fuel_log::{AllocationSummary, FuelLog};
pub use purchase::PurchaseRecord;
pub use request::FuelRequest;
