//! Latency aggregation
//!
//! Pure functions over latency samples (microseconds). Nothing here touches
//! a store or a clock.
//!
//! Percentiles use sorted-index lookup at `floor(q * n)`, never interpolation.

/// Quantile reported as "P90"
pub const P90: f64 = 0.9;

/// Arithmetic mean of `samples`, `None` if there are none
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Sorted index holding quantile `q` among `n` samples: `floor(q * n)`
///
/// Clamped to `n - 1` so it always addresses a sample when `n > 0`.
pub fn quantile_index(n: usize, q: f64) -> usize {
    let index = (q * n as f64).floor() as usize;
    index.min(n.saturating_sub(1))
}

/// Sorted index of the P90 sample among `n` samples
pub fn p90_index(n: usize) -> usize {
    quantile_index(n, P90)
}

/// Value at quantile `q` of an ascending slice
pub fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    sorted.get(quantile_index(sorted.len(), q)).copied()
}

/// Sort samples ascending. NaN never occurs in measured latencies; if it does
/// it sorts last.
pub fn sort_samples(samples: &mut [f64]) {
    samples.sort_by(|a, b| a.total_cmp(b));
}

/// Summary statistics of one sample series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencySummary {
    pub count: usize,
    pub mean: f64,
    pub p90: f64,
    pub min: f64,
    pub max: f64,
}

impl LatencySummary {
    /// Summarize `samples`; `None` when there are none
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let mean = mean(samples)?;

        let mut sorted = samples.to_vec();
        sort_samples(&mut sorted);

        Some(Self {
            count: sorted.len(),
            mean,
            p90: percentile(&sorted, P90)?,
            min: *sorted.first()?,
            max: *sorted.last()?,
        })
    }
}
