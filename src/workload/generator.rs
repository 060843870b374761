//! Random workload generator
//!
//! Wraps a seedable `StdRng`. Not cryptographically secure.

use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::KeyPool;

/// Source of random keys, values and key-pool picks
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    rng: StdRng,
}

impl WorkloadGenerator {
    /// Create a generator with a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the current wall-clock time
    pub fn from_time() -> Self {
        Self::from_seed(time_seed())
    }

    /// Create a generator from an optional seed, falling back to the clock
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_time(),
        }
    }

    /// Generate `length` bytes, each drawn uniformly from the full byte range
    pub fn random_bytes(&mut self, length: usize) -> Bytes {
        let mut buf = vec![0u8; length];
        self.rng.fill(buf.as_mut_slice());
        Bytes::from(buf)
    }

    /// Generate a fresh key/value pair
    pub fn key_value(&mut self, key_length: usize, value_length: usize) -> (Bytes, Bytes) {
        let key = self.random_bytes(key_length);
        let value = self.random_bytes(value_length);
        (key, value)
    }

    /// Pick a uniformly random key from the pool
    ///
    /// Returns `None` only when the pool is empty.
    pub fn pick<'a>(&mut self, pool: &'a KeyPool) -> Option<&'a Bytes> {
        if pool.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..pool.len());
        pool.get(index)
    }
}

/// Seed derived from nanoseconds since the Unix epoch
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
