//! sled-backed store
//!
//! `WriteOptions::sync` maps to `Db::flush`, which blocks until the
//! write is on disk.
//!
//! sled releases its directory lock from a background thread, so a handle
//! dropped by `close` may still hold the lock for a moment. `open` waits
//! for the lock (bounded by `LOCK_WAIT`) instead of failing straight away.

use std::io;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use bytes::Bytes;
use tracing::debug;

use super::{KvStore, OpenOptions, WriteOptions};
use crate::error::{BenchError, Result};

/// File sled keeps inside its data directory
const DB_FILE: &str = "db";

/// Upper bound on waiting for a previous handle to release the lock
const LOCK_WAIT: Duration = Duration::from_secs(5);

const LOCK_BACKOFF_START: Duration = Duration::from_millis(1);
const LOCK_BACKOFF_MAX: Duration = Duration::from_millis(50);

/// Store backed by an on-disk sled database
#[derive(Debug)]
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    /// Number of entries currently in the database
    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Whether `path` already holds a sled database
    pub fn exists(path: &Path) -> bool {
        path.join(DB_FILE).is_file()
    }
}

impl KvStore for SledStore {
    const NAME: &'static str = "sled";

    fn open(path: &Path, options: &OpenOptions) -> Result<Self> {
        if !options.create_if_missing && !Self::exists(path) {
            return Err(BenchError::Open {
                path: path.to_path_buf(),
                reason: "no sled database here and create_if_missing is false".to_string(),
            });
        }

        let db = open_waiting_for_lock(path).map_err(|e| BenchError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!(path = %path.display(), recovered = db.was_recovered(), "sled store opened");
        Ok(Self { db })
    }

    fn put(&mut self, key: &[u8], value: &[u8], options: &WriteOptions) -> Result<()> {
        self.db.insert(key, value)?;
        if options.sync {
            self.db.flush()?;
        }
        Ok(())
    }

    fn get(&self, key: &[u8]) -> Result<Option<Bytes>> {
        Ok(self
            .db
            .get(key)?
            .map(|value| Bytes::copy_from_slice(&value)))
    }

    /// Flush and drop the handle. The directory lock is released
    /// asynchronously; a following `open` waits for it.
    fn close(self) -> Result<()> {
        let flushed = self.db.flush()?;
        debug!(bytes = flushed, "sled store closed");
        Ok(())
    }
}

/// Open the database, retrying with backoff while another handle still
/// holds the directory lock
fn open_waiting_for_lock(path: &Path) -> sled::Result<sled::Db> {
    let deadline = Instant::now() + LOCK_WAIT;
    let mut backoff = LOCK_BACKOFF_START;

    loop {
        match sled::Config::new().path(path).open() {
            Err(e) if is_lock_contention(&e) && Instant::now() < deadline => {
                debug!(
                    path = %path.display(),
                    backoff_ms = backoff.as_millis() as u64,
                    "sled lock busy, retrying"
                );
                thread::sleep(backoff);
                backoff = (backoff * 2).min(LOCK_BACKOFF_MAX);
            }
            result => return result,
        }
    }
}

fn is_lock_contention(e: &sled::Error) -> bool {
    match e {
        sled::Error::Io(io) => {
            io.kind() == io::ErrorKind::WouldBlock
                || io.to_string().contains("could not acquire lock")
        }
        _ => false,
    }
}
