//! Tests for the workload generator and key pool
//!
//! These tests verify:
//! - Generated byte strings have the requested length
//! - Seeded generators are reproducible
//! - Pool picks stay inside the pool and cover it

use std::collections::HashSet;

use bytes::Bytes;
use kvbench::workload::{KeyPool, WorkloadGenerator};

// =============================================================================
// Helper Functions
// =============================================================================

fn pool_of(n: usize) -> KeyPool {
    let mut pool = KeyPool::new();
    for i in 0..n {
        pool.push(Bytes::from(format!("key-{}", i)));
    }
    pool
}

// =============================================================================
// Generator Tests
// =============================================================================

#[test]
fn test_random_bytes_has_requested_length() {
    let mut generator = WorkloadGenerator::from_seed(1);

    for len in [0usize, 1, 8, 16, 100, 4096] {
        assert_eq!(generator.random_bytes(len).len(), len);
    }
}

#[test]
fn test_random_bytes_zero_length_is_empty() {
    let mut generator = WorkloadGenerator::from_time();
    assert!(generator.random_bytes(0).is_empty());
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = WorkloadGenerator::from_seed(42);
    let mut b = WorkloadGenerator::from_seed(42);

    for _ in 0..10 {
        assert_eq!(a.random_bytes(32), b.random_bytes(32));
    }
}

#[test]
fn test_different_seeds_differ() {
    let mut a = WorkloadGenerator::from_seed(1);
    let mut b = WorkloadGenerator::from_seed(2);

    assert_ne!(a.random_bytes(64), b.random_bytes(64));
}

#[test]
fn test_optional_seed_uses_seed_when_given() {
    let mut a = WorkloadGenerator::new(Some(7));
    let mut b = WorkloadGenerator::from_seed(7);

    assert_eq!(a.random_bytes(16), b.random_bytes(16));
}

#[test]
fn test_bytes_span_full_range() {
    let mut generator = WorkloadGenerator::from_seed(3);
    let bytes = generator.random_bytes(64 * 1024);

    let distinct: HashSet<u8> = bytes.iter().copied().collect();
    // 64 KiB of uniform bytes hits every value with overwhelming probability
    assert_eq!(distinct.len(), 256);
}

#[test]
fn test_key_value_lengths() {
    let mut generator = WorkloadGenerator::from_seed(5);
    let (key, value) = generator.key_value(8, 100);

    assert_eq!(key.len(), 8);
    assert_eq!(value.len(), 100);
}

// =============================================================================
// Key Pool Tests
// =============================================================================

#[test]
fn test_pool_starts_empty() {
    let pool = KeyPool::new();
    assert!(pool.is_empty());
    assert_eq!(pool.len(), 0);
}

#[test]
fn test_pool_keeps_write_order_and_duplicates() {
    let mut pool = KeyPool::with_capacity(4);
    pool.push(Bytes::from_static(b"a"));
    pool.push(Bytes::from_static(b"b"));
    pool.push(Bytes::from_static(b"a"));

    assert_eq!(pool.len(), 3);
    let keys: Vec<&[u8]> = pool.iter().map(|k| k.as_ref()).collect();
    assert_eq!(keys, vec![&b"a"[..], &b"b"[..], &b"a"[..]]);
}

#[test]
fn test_pick_from_empty_pool_is_none() {
    let mut generator = WorkloadGenerator::from_seed(9);
    assert!(generator.pick(&KeyPool::new()).is_none());
}

#[test]
fn test_pick_from_single_key_pool() {
    let mut generator = WorkloadGenerator::from_seed(9);
    let pool = pool_of(1);

    for _ in 0..10 {
        assert_eq!(generator.pick(&pool), pool.get(0));
    }
}

#[test]
fn test_pick_covers_whole_pool() {
    let mut generator = WorkloadGenerator::from_seed(11);
    let pool = pool_of(10);

    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let key = generator.pick(&pool).unwrap();
        seen.insert(key.clone());
    }

    assert_eq!(seen.len(), 10);
}
