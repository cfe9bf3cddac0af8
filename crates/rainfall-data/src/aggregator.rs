//! Monthly aggregation and histogram binning behind the rainfall charts.

use std::collections::BTreeMap;

use rainfall_core::models::YearlyDataset;

/// Number of bins in the daily rainfall histogram.
pub const HISTOGRAM_BINS: usize = 20;

// ── MonthlyAccumulator ────────────────────────────────────────────────────────

/// Running sum and count of the non-missing amounts in one month.
#[derive(Debug, Clone, Copy, Default)]
struct MonthlyAccumulator {
    sum: f64,
    count: u32,
}

impl MonthlyAccumulator {
    fn add(&mut self, amount: Option<f64>) {
        if let Some(value) = amount {
            self.sum += value;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Group `dataset` by month. Every month with at least one row appears,
/// even when all of its amounts are missing.
fn group_by_month(dataset: &YearlyDataset) -> BTreeMap<u32, MonthlyAccumulator> {
    let mut map: BTreeMap<u32, MonthlyAccumulator> = BTreeMap::new();
    for record in dataset.records() {
        map.entry(record.month).or_default().add(record.amount_mm);
    }
    map
}

// ── Monthly aggregates ────────────────────────────────────────────────────────

/// Total rainfall per month, ascending by month.
///
/// A month whose amounts are all missing totals `0.0`.
pub fn monthly_totals(dataset: &YearlyDataset) -> Vec<(u32, f64)> {
    group_by_month(dataset)
        .into_iter()
        .map(|(month, acc)| (month, acc.sum))
        .collect()
}

/// Mean daily rainfall per month, ascending by month.
///
/// Months without any non-missing amount have no mean and are left out.
pub fn monthly_means(dataset: &YearlyDataset) -> Vec<(u32, f64)> {
    group_by_month(dataset)
        .into_iter()
        .filter_map(|(month, acc)| acc.mean().map(|mean| (month, mean)))
        .collect()
}

// ── Histogram ─────────────────────────────────────────────────────────────────

/// Equal-width bins over the non-missing amounts of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges; `edges.len() == counts.len() + 1`.
    pub edges: Vec<f64>,
    /// Number of values falling in each bin.
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// Each bin is half-open except the last, which also holds `max`. When all
    /// values are equal the range is widened by 0.5 on each side. Returns
    /// `None` when there are no values or `bins` is zero.
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0u64; bins];
        for &v in values {
            let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Self { edges, counts })
    }

    /// The default 20-bin histogram of a dataset's daily amounts.
    pub fn of_dataset(dataset: &YearlyDataset) -> Option<Self> {
        let values: Vec<f64> = dataset.amounts().collect();
        Self::from_values(&values, HISTOGRAM_BINS)
    }

    /// `(lower, upper, count)` for each bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| (self.edges[i], self.edges[i + 1], count))
    }

    /// Sum of all bin counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
