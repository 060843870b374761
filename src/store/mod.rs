//! Store Module
//!
//! The interface to the key-value engine under test.
//!
//! ## Responsibilities
//! - Open (or create) a store at a data directory
//! - Synchronous point writes and reads
//! - Release the handle on close
//!
//! The engine's own write path, compaction and indexing are its business;
//! the benchmark only sees `open`, `put`, `get` and `close`.

mod memory;
mod sled_store;

use std::path::Path;

use bytes::Bytes;

use crate::error::Result;

pub use memory::MemoryStore;
pub use sled_store::SledStore;

/// Options applied when opening a store
#[derive(Debug, Clone, Copy)]
pub struct OpenOptions {
    /// Create the store when the path holds none yet
    pub create_if_missing: bool,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            create_if_missing: true,
        }
    }
}

/// Options applied to a single put
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Make the write durable before returning
    pub sync: bool,
}

/// A key-value engine driven by the benchmark
///
/// Every call is synchronous and blocking. Errors are reported per call;
/// only `open` failures are meant to stop a run.
pub trait KvStore: Sized {
    /// Short engine name for reports
    const NAME: &'static str;

    /// Open the store at `path`
    fn open(path: &Path, options: &OpenOptions) -> Result<Self>;

    /// Write one key/value pair
    fn put(&mut self, key: &[u8], value: &[u8], options: &WriteOptions) -> Result<()>;

    /// Read the value stored under `key`
    fn get(&self, key: &[u8]) -> Result<Option<Bytes>>;

    /// Flush and release the handle
    fn close(self) -> Result<()>;

    /// Engine name of this handle
    fn name(&self) -> &'static str {
        Self::NAME
    }
}
