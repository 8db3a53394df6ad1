//! Domain services

pub mod allocator;
pub mod random_source;

pub use allocator::{
    allocate, purchase_count, CONVERGENCE_TOLERANCE, MAX_CORRECTION_ITERATIONS, MIN_FILL_GALLONS,
};
pub use random_source::RandomSource;
