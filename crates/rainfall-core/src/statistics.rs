//! Descriptive statistics over one year of rainfall amounts.
//!
//! Missing amounts are skipped everywhere. Deviation and variance use the
//! sample (n − 1) divisor and are undefined for fewer than two values.

use crate::error::{RainfallError, Result};
use crate::models::{RainfallRecord, YearlyDataset};

// ── Primitive helpers ─────────────────────────────────────────────────────────

/// Compute the `p`-th percentile of a **sorted** slice using linear
/// interpolation between the two closest ranks.
///
/// Returns `0.0` for an empty slice.
pub fn percentile(sorted_data: &[f64], p: f64) -> f64 {
    if sorted_data.is_empty() {
        return 0.0;
    }
    let len = sorted_data.len();
    if len == 1 {
        return sorted_data[0];
    }
    let rank = (p / 100.0) * (len as f64 - 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted_data[lo];
    }
    let frac = rank - lo as f64;
    sorted_data[lo] + frac * (sorted_data[hi] - sorted_data[lo])
}

/// Median of a sorted slice; the midpoint of the two central values for an
/// even count.
pub fn median(sorted_data: &[f64]) -> f64 {
    percentile(sorted_data, 50.0)
}

/// Most frequent value of a sorted slice.
///
/// When several values share the highest frequency the smallest one wins.
/// Returns `None` for an empty slice.
pub fn mode(sorted_data: &[f64]) -> Option<f64> {
    let mut best: Option<(f64, usize)> = None;
    let mut i = 0;
    while i < sorted_data.len() {
        let value = sorted_data[i];
        let mut run = 1;
        while i + run < sorted_data.len() && sorted_data[i + run] == value {
            run += 1;
        }
        // Strictly greater keeps the earliest (smallest) value on ties.
        if best.map_or(true, |(_, count)| run > count) {
            best = Some((value, run));
        }
        i += run;
    }
    best.map(|(value, _)| value)
}

/// Sample variance (divisor `n - 1`); `None` for fewer than two values.
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some(squares / (n - 1.0))
}

// ── StatisticsSummary ─────────────────────────────────────────────────────────

/// Aggregate figures for one yearly dataset, computed on request.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSummary {
    /// Number of non-missing amounts the figures were computed from.
    pub count: usize,
    pub total: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    /// Sample standard deviation; `None` with fewer than two values.
    pub std_dev: Option<f64>,
    /// Sample variance; `None` with fewer than two values.
    pub variance: Option<f64>,
    /// Every record whose amount equals the yearly maximum, in file order.
    pub max_records: Vec<RainfallRecord>,
}

impl StatisticsSummary {
    /// Compute the summary for `dataset`.
    ///
    /// Fails with [`RainfallError::EmptyDataset`] when the dataset holds no
    /// non-missing amount.
    pub fn compute(dataset: &YearlyDataset) -> Result<Self> {
        let values: Vec<f64> = dataset.amounts().collect();
        if values.is_empty() {
            return Err(RainfallError::EmptyDataset {
                year: dataset.year(),
            });
        }

        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let count = values.len();
        let total: f64 = values.iter().sum();
        let mean = total / count as f64;
        let variance = sample_variance(&values);
        let max = sorted[count - 1];

        let max_records = dataset
            .records()
            .iter()
            .filter(|r| r.amount_mm == Some(max))
            .copied()
            .collect();

        Ok(Self {
            count,
            total,
            mean,
            median: median(&sorted),
            mode: mode(&sorted).unwrap_or(max),
            std_dev: variance.map(f64::sqrt),
            variance,
            max_records,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
