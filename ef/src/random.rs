//! Injectable randomness
//!
//! Transformers take a [`RandomSource`] rather than reaching for a global
//! RNG, so tests can script exact pool and template selections instead of
//! asserting statistically.

use rand::Rng;

/// Source of uniform random values in `[0, 1)`
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn next_f64(&mut self) -> f64;
}

/// Production source backed by the `rand` thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::rng().random()
    }
}

/// Scripted source that cycles through a fixed sequence of values.
///
/// Intended for tests: `SeqRandom::new([0.0])` always selects the first
/// entry of every pool.
#[derive(Debug, Clone)]
pub struct SeqRandom {
    values: Vec<f64>,
    index: usize,
}

impl SeqRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "SeqRandom needs at least one value");
        Self { values, index: 0 }
    }
}

impl RandomSource for SeqRandom {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}

/// Select one entry from a non-empty slice by uniform index
pub fn pick<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    debug_assert!(!items.is_empty(), "pick requires a non-empty slice");
    let index = (rng.next_f64() * items.len() as f64) as usize;
    // next_f64 is < 1.0 by contract; clamp in case a source misbehaves
    &items[index.min(items.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_covers_range() {
        let items = ["a", "b", "c", "d"];
        let mut rng = SeqRandom::new([0.0, 0.26, 0.51, 0.99]);
        assert_eq!(*pick(&mut rng, &items), "a");
        assert_eq!(*pick(&mut rng, &items), "b");
        assert_eq!(*pick(&mut rng, &items), "c");
        assert_eq!(*pick(&mut rng, &items), "d");
    }

    #[test]
    fn test_pick_clamps_out_of_range_source() {
        let items = ["only"];
        let mut rng = SeqRandom::new([1.0]);
        assert_eq!(*pick(&mut rng, &items), "only");
    }

    #[test]
    fn test_thread_random_in_unit_interval() {
        let mut rng = ThreadRandom;
        for _ in 0..100 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
