use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header of the measurement column in the yearly CSV files.
pub const AMOUNT_COLUMN: &str = "Rainfall amount (millimetres)";

/// Columns a yearly CSV file must provide; any others are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Year", "Month", "Day", AMOUNT_COLUMN];

/// Days strictly above this amount are listed by the high-rainfall report.
pub const HIGH_RAINFALL_THRESHOLD_MM: f64 = 20.0;

/// One measured day of precipitation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RainfallRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    /// Calendar month, 1–12.
    #[serde(rename = "Month")]
    pub month: u32,
    #[serde(rename = "Day")]
    pub day: u32,
    /// Rainfall in millimetres; `None` when the cell was empty.
    #[serde(rename = "Rainfall amount (millimetres)")]
    pub amount_mm: Option<f64>,
}

impl RainfallRecord {
    pub fn new(year: i32, month: u32, day: u32, amount_mm: Option<f64>) -> Self {
        Self {
            year,
            month,
            day,
            amount_mm,
        }
    }
}

/// All records loaded for one calendar year, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyDataset {
    year: i32,
    records: Vec<RainfallRecord>,
}

impl YearlyDataset {
    pub fn new(year: i32, records: Vec<RainfallRecord>) -> Self {
        Self { year, records }
    }

    /// The year this dataset was loaded for (the mapping key).
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn records(&self) -> &[RainfallRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Non-missing rainfall amounts in file order.
    pub fn amounts(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().filter_map(|r| r.amount_mm)
    }

    /// Number of records whose `Year` field differs from [`Self::year`].
    pub fn mismatched_year_count(&self) -> usize {
        self.records.iter().filter(|r| r.year != self.year).count()
    }
}

/// Loaded datasets keyed by year; iteration is in ascending year order.
pub type YearlyDatasets = BTreeMap<i32, YearlyDataset>;
