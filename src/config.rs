//! Configuration for kvbench
//!
//! Centralized configuration with sensible defaults.
//!
//! The three workload knobs come from the environment (`ITERATIONS`,
//! `KEY_LENGTH`, `VALUE_LENGTH`) and are parsed with C `atoi` rules:
//! anything missing or non-numeric becomes zero and nothing is validated.

use std::path::PathBuf;

/// Default data directory for the store under test
pub const DEFAULT_DATA_DIR: &str = "/tmp/kvbench_data/";

/// Environment variable holding the per-phase operation count
pub const ITERATIONS_VAR: &str = "ITERATIONS";

/// Environment variable holding the key length in bytes
pub const KEY_LENGTH_VAR: &str = "KEY_LENGTH";

/// Environment variable holding the value length in bytes
pub const VALUE_LENGTH_VAR: &str = "VALUE_LENGTH";

/// Main configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Workload Configuration
    // -------------------------------------------------------------------------
    /// Number of operations in each phase
    pub iterations: usize,

    /// Bytes per generated key
    pub key_length: usize,

    /// Bytes per generated value
    pub value_length: usize,

    /// Seed for the workload generator; `None` seeds from the wall clock
    pub seed: Option<u64>,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Directory handed to the store on open. Never cleaned between runs.
    pub data_dir: PathBuf,

    /// Create the store if the directory does not hold one yet
    pub create_if_missing: bool,

    /// Request a durable write (fsync) on every put
    pub sync_writes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: 0,
            key_length: 0,
            value_length: 0,
            seed: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            create_if_missing: true,
            sync_writes: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Read the workload knobs from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the workload knobs through `lookup`, which maps a variable name
    /// to its raw value (if set)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| parse_count(lookup(name).as_deref());

        Config {
            iterations: read(ITERATIONS_VAR),
            key_length: read(KEY_LENGTH_VAR),
            value_length: read(VALUE_LENGTH_VAR),
            ..Config::default()
        }
    }
}

/// Parse a count the way C `atoi` would, saturating negatives to zero.
///
/// Leading whitespace and one sign are accepted, then digits up to the first
/// non-digit. `None`, empty input and input without leading digits give 0.
pub fn parse_count(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return 0;
    };

    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: usize = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(usize::from(b - b'0'));
    }

    if negative {
        0
    } else {
        value
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of operations per phase
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Set the generated key length (in bytes)
    pub fn key_length(mut self, len: usize) -> Self {
        self.config.key_length = len;
        self
    }

    /// Set the generated value length (in bytes)
    pub fn value_length(mut self, len: usize) -> Self {
        self.config.value_length = len;
        self
    }

    /// Fix the workload seed for reproducible runs
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the data directory handed to the store
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set whether the store is created when absent
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.config.create_if_missing = create;
        self
    }

    /// Set whether every put is synced to disk
    pub fn sync_writes(mut self, sync: bool) -> Self {
        self.config.sync_writes = sync;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
