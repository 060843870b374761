//! Driver Module
//!
//! Runs the benchmark phases against a store.
//!
//! ## Phases
//! 1. Write: fresh key/value per round, timed put, key appended to the pool
//! 2. Read: random pooled key per round, timed get
//! 3. Combined: timed put of a fresh pair, then a timed get of a random
//!    pooled key (the key just written is eligible)
//!
//! Phases run strictly one after another on the calling thread. Every
//! operation contributes a sample, whether or not the store reported success.

mod timing;

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::store::{KvStore, OpenOptions, WriteOptions};
use crate::workload::{KeyPool, WorkloadGenerator};

pub use timing::{as_micros_f64, timed_get, timed_put, OpKind, TimedSample};

// =============================================================================
// Results
// =============================================================================

/// Benchmark phase identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Write,
    Read,
    Combined,
}

impl Phase {
    /// All phases in run order
    pub const ALL: [Phase; 3] = [Phase::Write, Phase::Read, Phase::Combined];

    /// Progress line printed when the phase starts
    pub fn start_message(self) -> &'static str {
        match self {
            Phase::Write => "Starting writes...",
            Phase::Read => "Starting reads...",
            Phase::Combined => "Starting reads and writes...",
        }
    }

    /// Heading of the phase's result block
    pub fn title(self) -> &'static str {
        match self {
            Phase::Write => "Write Test Results",
            Phase::Read => "Read Test Results",
            Phase::Combined => "Read and Write Test Results",
        }
    }
}

/// Latency samples of one operation kind within a phase
#[derive(Debug, Clone)]
pub struct SampleSeries {
    pub op: OpKind,

    /// Microsecond latencies in issue order
    pub samples: Vec<f64>,

    /// Operations whose store call failed (their samples are still included)
    pub failures: usize,
}

impl SampleSeries {
    fn with_capacity(op: OpKind, capacity: usize) -> Self {
        Self {
            op,
            samples: Vec::with_capacity(capacity),
            failures: 0,
        }
    }

    fn record(&mut self, sample: TimedSample) {
        self.samples.push(sample.micros);
        if !sample.ok {
            self.failures += 1;
        }
    }

    /// Number of recorded operations
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Outcome of one phase
#[derive(Debug, Clone)]
pub struct PhaseResult {
    pub phase: Phase,

    /// Wall-clock time of the whole phase, including key generation
    pub elapsed: Duration,

    /// One series for the write and read phases, two (write, read) for the
    /// combined phase
    pub series: Vec<SampleSeries>,
}

impl PhaseResult {
    /// Series for operation kind `op`, if the phase issued any
    pub fn series(&self, op: OpKind) -> Option<&SampleSeries> {
        self.series.iter().find(|s| s.op == op)
    }

    /// Total operations issued in the phase
    pub fn operation_count(&self) -> usize {
        self.series.iter().map(SampleSeries::len).sum()
    }
}

/// Outcome of a full run
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub phases: Vec<PhaseResult>,

    /// Wall-clock time of all phases together
    pub total: Duration,
}

impl BenchReport {
    /// Result of `phase`, if it ran
    pub fn phase(&self, phase: Phase) -> Option<&PhaseResult> {
        self.phases.iter().find(|p| p.phase == phase)
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Benchmark driver owning the store handle, the random source and the key
/// pool for one run
pub struct Driver<S: KvStore> {
    config: Config,
    store: S,
    generator: WorkloadGenerator,
    pool: KeyPool,
}

impl<S: KvStore> Driver<S> {
    /// Wrap an already opened store
    pub fn new(config: Config, store: S) -> Self {
        debug!(
            iterations = config.iterations,
            key_length = config.key_length,
            value_length = config.value_length,
            seed = ?config.seed,
            "driver configured"
        );

        let generator = WorkloadGenerator::new(config.seed);
        let pool = KeyPool::with_capacity(config.iterations.saturating_mul(2));

        Self {
            config,
            store,
            generator,
            pool,
        }
    }

    /// Open the store at `config.data_dir` and wrap it
    pub fn open(config: Config) -> Result<Self> {
        let options = OpenOptions {
            create_if_missing: config.create_if_missing,
        };
        let store = S::open(&config.data_dir, &options)?;
        info!(
            store = store.name(),
            path = %config.data_dir.display(),
            "store opened"
        );
        Ok(Self::new(config, store))
    }

    /// Run the write, read and combined phases in order
    pub fn run(&mut self) -> BenchReport {
        let start = Instant::now();

        let phases = Phase::ALL
            .into_iter()
            .map(|phase| self.run_phase(phase))
            .collect();

        BenchReport {
            phases,
            total: start.elapsed(),
        }
    }

    /// Run a single phase
    pub fn run_phase(&mut self, phase: Phase) -> PhaseResult {
        match phase {
            Phase::Write => self.run_write_phase(),
            Phase::Read => self.run_read_phase(),
            Phase::Combined => self.run_combined_phase(),
        }
    }

    /// `iterations` timed puts of fresh pairs
    pub fn run_write_phase(&mut self) -> PhaseResult {
        info!("{}", Phase::Write.start_message());
        let start = Instant::now();
        let mut writes = SampleSeries::with_capacity(OpKind::Put, self.config.iterations);

        for _ in 0..self.config.iterations {
            writes.record(self.write_fresh_pair());
        }

        self.finish(Phase::Write, start, vec![writes])
    }

    /// `iterations` timed gets of random pooled keys
    pub fn run_read_phase(&mut self) -> PhaseResult {
        info!("{}", Phase::Read.start_message());
        let start = Instant::now();
        let mut reads = SampleSeries::with_capacity(OpKind::Get, self.config.iterations);

        for _ in 0..self.config.iterations {
            match self.read_random_key() {
                Some(sample) => reads.record(sample),
                None => {
                    warn!("Key pool is empty, skipping reads");
                    break;
                }
            }
        }

        self.finish(Phase::Read, start, vec![reads])
    }

    /// `iterations` rounds of one timed put followed by one timed get
    pub fn run_combined_phase(&mut self) -> PhaseResult {
        info!("{}", Phase::Combined.start_message());
        let start = Instant::now();
        let mut writes = SampleSeries::with_capacity(OpKind::Put, self.config.iterations);
        let mut reads = SampleSeries::with_capacity(OpKind::Get, self.config.iterations);

        for _ in 0..self.config.iterations {
            writes.record(self.write_fresh_pair());
            // the pool holds at least the key just written
            if let Some(sample) = self.read_random_key() {
                reads.record(sample);
            }
        }

        self.finish(Phase::Combined, start, vec![writes, reads])
    }

    /// Flush and release the store
    pub fn close(self) -> Result<()> {
        let name = self.store.name();
        self.store.close()?;
        info!(store = name, "store closed");
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Keys written so far
    pub fn key_pool(&self) -> &KeyPool {
        &self.pool
    }

    /// The store under test
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn write_options(&self) -> WriteOptions {
        WriteOptions {
            sync: self.config.sync_writes,
        }
    }

    fn write_fresh_pair(&mut self) -> TimedSample {
        let (key, value) = self
            .generator
            .key_value(self.config.key_length, self.config.value_length);
        let options = self.write_options();

        let sample = timed_put(&mut self.store, &key, &value, &options);
        self.pool.push(key);
        sample
    }

    fn read_random_key(&mut self) -> Option<TimedSample> {
        let key = self.generator.pick(&self.pool)?;
        Some(timed_get(&self.store, key))
    }

    fn finish(&self, phase: Phase, start: Instant, series: Vec<SampleSeries>) -> PhaseResult {
        let elapsed = start.elapsed();
        for s in &series {
            if s.failures > 0 {
                warn!(
                    phase = ?phase,
                    op = s.op.label(),
                    failures = s.failures,
                    total = s.len(),
                    "failed operations are included in latency statistics"
                );
            }
        }
        info!(phase = ?phase, elapsed_us = elapsed.as_micros() as u64, "phase finished");

        PhaseResult {
            phase,
            elapsed,
            series,
        }
    }
}
