//! Uniform randomness used by the allocator

use rand::Rng;

/// Source of uniform random draws.
///
/// Every [`rand::Rng`] is a source, so callers pass `rand::thread_rng()` in
/// normal use and a seeded `StdRng` when they need repeatable output.
pub trait RandomSource {
    /// Sample from `[min, max)`. Returns `min` when the range is empty.
    fn uniform(&mut self, min: f64, max: f64) -> f64;

    /// Sample an index from `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// Pick one element, or `None` for an empty slice
    fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.index(items.len())])
        }
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        min + self.gen::<f64>() * (max - min)
    }

    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}
