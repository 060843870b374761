//! Workload Module
//!
//! Synthetic keys and values for the benchmark phases.
//!
//! ## Responsibilities
//! - Generate fixed-length random byte strings
//! - Remember every key written so far (the key pool)
//! - Pick uniformly random keys out of the pool for reads
//!
//! The generator owns its random source, so two generators built from the
//! same seed produce identical workloads.

mod generator;
mod pool;

pub use generator::WorkloadGenerator;
pub use pool::KeyPool;
