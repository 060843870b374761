//! In-memory store
//!
//! Plain `BTreeMap` baseline. Useful for measuring harness overhead and for
//! tests that must not touch the disk.

use std::collections::BTreeMap;
use std::path::Path;

use bytes::Bytes;

use super::{KvStore, OpenOptions, WriteOptions};
use crate::error::Result;

/// Store that keeps everything in process memory
///
/// The path and all options are ignored.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: BTreeMap<Bytes, Bytes>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys stored
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl KvStore for MemoryStore {
    const NAME: &'static str = "memory";

    fn open(_path: &Path, _options: &OpenOptions) -> Result<Self> {
        Ok(Self::new())
    }

    fn put(&mut self, key: &[u8], value: &[u8], _options: &WriteOptions) -> Result<()> {
        self.data
            .insert(Bytes::copy_from_slice(key), Bytes::copy_from_slice(value));
        Ok(())
    }

    fn get(&self, key: &[u8]) -> Result<Option<Bytes>> {
        Ok(self.data.get(key).cloned())
    }

    fn close(self) -> Result<()> {
        Ok(())
    }
}
