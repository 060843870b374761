//! Key pool
//!
//! Append-only list of every key written during a run.

use bytes::Bytes;

/// Ordered, append-only sequence of written keys
///
/// Duplicate keys are kept as separate entries; the pool is never pruned.
#[derive(Debug, Clone, Default)]
pub struct KeyPool {
    keys: Vec<Bytes>,
}

impl KeyPool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pool with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
        }
    }

    /// Append a written key
    pub fn push(&mut self, key: Bytes) {
        self.keys.push(key);
    }

    /// Get the key at `index`
    pub fn get(&self, index: usize) -> Option<&Bytes> {
        self.keys.get(index)
    }

    /// Number of keys written so far
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over keys in write order
    pub fn iter(&self) -> impl Iterator<Item = &Bytes> {
        self.keys.iter()
    }
}
