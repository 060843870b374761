//! Timed operation wrapper
//!
//! Each call takes a start `Instant`, performs exactly one store call, then
//! takes the end `Instant`. Failure logging happens after the clock stops.

use std::time::{Duration, Instant};

use tracing::error;

use crate::error::BenchError;
use crate::store::{KvStore, WriteOptions};

/// Kind of timed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Put,
    Get,
}

impl OpKind {
    /// Lowercase label used in reports ("write" / "read")
    pub fn label(self) -> &'static str {
        match self {
            OpKind::Put => "write",
            OpKind::Get => "read",
        }
    }
}

/// Latency of one operation and whether it succeeded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedSample {
    /// Elapsed time in microseconds
    pub micros: f64,

    /// `false` if the store reported an error (or a read found nothing)
    pub ok: bool,
}

/// Convert a duration to fractional microseconds
pub fn as_micros_f64(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1_000_000.0
}

/// Time a single put
///
/// A failed put is logged and its latency is still returned.
pub fn timed_put<S: KvStore>(
    store: &mut S,
    key: &[u8],
    value: &[u8],
    options: &WriteOptions,
) -> TimedSample {
    let start = Instant::now();
    let result = store.put(key, value, options);
    let elapsed = start.elapsed();

    if let Err(e) = &result {
        error!("Error during write: {}", e);
    }

    TimedSample {
        micros: as_micros_f64(elapsed),
        ok: result.is_ok(),
    }
}

/// Time a single get
///
/// A failed get, or a get that finds no value, is logged and its latency is
/// still returned.
pub fn timed_get<S: KvStore>(store: &S, key: &[u8]) -> TimedSample {
    let start = Instant::now();
    let result = store.get(key);
    let elapsed = start.elapsed();

    let ok = match result {
        Ok(Some(_)) => true,
        Ok(None) => {
            error!("Error during read: {}", BenchError::KeyNotFound);
            false
        }
        Err(e) => {
            error!("Error during read: {}", e);
            false
        }
    };

    TimedSample {
        micros: as_micros_f64(elapsed),
        ok,
    }
}
