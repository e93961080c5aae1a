//! Random draws used by the forecast engine.
//!
//! The engine only ever needs "an integer in this inclusive range", so that is
//! the whole interface. Production code wraps a `rand` RNG; tests script the
//! values they want.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Next integer in `low..=high`
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

/// Adapter from any `rand` RNG to a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing RNG
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeded from the platform (`crypto.getRandomValues` in the browser)
    pub fn from_entropy() -> Self {
        RngSource::new(StdRng::from_entropy())
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is present, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        (**self).next_in_range(low, high)
    }
}
