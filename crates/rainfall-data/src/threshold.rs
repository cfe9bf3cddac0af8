use rainfall_core::models::{RainfallRecord, YearlyDataset};

/// Records whose amount is strictly above `threshold_mm`, in file order.
///
/// Rows with a missing amount never match.
pub fn days_above(dataset: &YearlyDataset, threshold_mm: f64) -> Vec<RainfallRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| r.amount_mm.is_some_and(|a| a > threshold_mm))
        .copied()
        .collect()
}
