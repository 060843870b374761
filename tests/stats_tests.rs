//! Tests for latency aggregation
//!
//! These tests verify:
//! - Mean equals sum / count
//! - P90 index is floor(0.9 * n)
//! - Percentile lookup without interpolation
//! - Summary of unsorted input and empty input

use kvbench::stats::{
    mean, p90_index, percentile, quantile_index, sort_samples, LatencySummary, P90,
};

const EPSILON: f64 = 1e-9;

// =============================================================================
// Mean Tests
// =============================================================================

#[test]
fn test_mean_of_samples() {
    let samples = [1.0, 2.0, 3.0, 4.0];
    let m = mean(&samples).unwrap();
    assert!((m - 2.5).abs() < EPSILON);
}

#[test]
fn test_mean_matches_sum_over_count() {
    let samples: Vec<f64> = (0..1000).map(|i| (i as f64) * 0.37 + 1.5).collect();
    let expected = samples.iter().sum::<f64>() / samples.len() as f64;
    let m = mean(&samples).unwrap();
    assert!((m - expected).abs() < EPSILON);
}

#[test]
fn test_mean_single_sample() {
    assert_eq!(mean(&[12.5]), Some(12.5));
}

#[test]
fn test_mean_empty_is_none() {
    assert_eq!(mean(&[]), None);
}

// =============================================================================
// Index Tests
// =============================================================================

#[test]
fn test_p90_index_for_100_samples() {
    assert_eq!(p90_index(100), 90);
}

#[test]
fn test_p90_index_is_floor() {
    for n in 1..=1000usize {
        let expected = ((0.9 * n as f64).floor() as usize).min(n - 1);
        assert_eq!(p90_index(n), expected, "n = {}", n);
        assert!(p90_index(n) < n);
    }
}

#[test]
fn test_p90_index_small_counts_in_bounds() {
    assert_eq!(p90_index(1), 0);
    assert_eq!(p90_index(2), 1);
    assert_eq!(p90_index(5), 4);
    assert_eq!(p90_index(10), 9);
}

#[test]
fn test_p90_index_zero_samples() {
    assert_eq!(p90_index(0), 0);
}

#[test]
fn test_quantile_index_extremes() {
    assert_eq!(quantile_index(10, 0.0), 0);
    assert_eq!(quantile_index(10, 1.0), 9);
    assert_eq!(quantile_index(10, 0.5), 5);
}

// =============================================================================
// Percentile Tests
// =============================================================================

#[test]
fn test_percentile_is_91st_smallest_of_100() {
    let sorted: Vec<f64> = (1..=100).map(f64::from).collect();
    assert_eq!(percentile(&sorted, P90), Some(91.0));
}

#[test]
fn test_percentile_no_interpolation() {
    let sorted = [10.0, 20.0, 30.0];
    // floor(0.9 * 3) = 2
    assert_eq!(percentile(&sorted, P90), Some(30.0));
}

#[test]
fn test_percentile_empty_is_none() {
    assert_eq!(percentile(&[], P90), None);
}

#[test]
fn test_sort_samples_ascending() {
    let mut samples = vec![5.0, 1.0, 3.5, 2.0, 1.0];
    sort_samples(&mut samples);
    assert_eq!(samples, vec![1.0, 1.0, 2.0, 3.5, 5.0]);
}

// =============================================================================
// Summary Tests
// =============================================================================

#[test]
fn test_summary_of_unsorted_samples() {
    let samples: Vec<f64> = (1..=100).rev().map(f64::from).collect();
    let summary = LatencySummary::from_samples(&samples).unwrap();

    assert_eq!(summary.count, 100);
    assert!((summary.mean - 50.5).abs() < EPSILON);
    assert_eq!(summary.p90, 91.0);
    assert_eq!(summary.min, 1.0);
    assert_eq!(summary.max, 100.0);
}

#[test]
fn test_summary_does_not_reorder_input() {
    let samples = vec![3.0, 1.0, 2.0];
    let _ = LatencySummary::from_samples(&samples);
    assert_eq!(samples, vec![3.0, 1.0, 2.0]);
}

#[test]
fn test_summary_single_sample() {
    let summary = LatencySummary::from_samples(&[7.0]).unwrap();

    assert_eq!(summary.count, 1);
    assert_eq!(summary.mean, 7.0);
    assert_eq!(summary.p90, 7.0);
}

#[test]
fn test_summary_empty_is_none() {
    assert!(LatencySummary::from_samples(&[]).is_none());
}
