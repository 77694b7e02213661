// =============================================================================
// Entropy Source - Shared, seedable pseudo-random generator
// =============================================================================
//
// The price feed and the sentiment stub draw from one generator so that a
// single seed reproduces a whole run. Draws take a short mutex hold; nothing
// awaits while the lock is held.
// =============================================================================

use parking_lot::Mutex;
use rand::prelude::*;
use rand_distr::StandardNormal;

pub struct EntropySource {
    rng: Mutex<StdRng>,
}

impl EntropySource {
    /// Seeded from the OS.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic generator for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Pick the constructor from an optional configured seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Uniform draw from the closed interval `[low, high]`.
    pub fn uniform(&self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.rng.lock().gen_range(low..=high)
    }

    /// Normal draw with the given mean and standard deviation.
    pub fn normal(&self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = self.rng.lock().sample(StandardNormal);
        mean + std_dev * z
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
