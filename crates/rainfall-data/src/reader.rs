//! CSV loading for the yearly rainfall files.
//!
//! Each year is read from `Daily_Rainfall_<year>.csv` inside the data
//! directory. Only the `Year`, `Month`, `Day` and rainfall amount columns are
//! used; every other column is ignored.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rainfall_core::error::{RainfallError, Result};
use rainfall_core::models::{RainfallRecord, YearlyDataset, YearlyDatasets, REQUIRED_COLUMNS};
use tracing::{debug, info, warn};

/// Years the explorer always loads.
pub const YEARS: [i32; 3] = [2021, 2022, 2023];

/// File name holding the records for `year`.
pub fn file_name_for(year: i32) -> String {
    format!("Daily_Rainfall_{}.csv", year)
}

// ── DataSources ───────────────────────────────────────────────────────────────

/// Mapping of year → CSV path to load at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    files: BTreeMap<i32, PathBuf>,
}

impl DataSources {
    /// The fixed [`YEARS`] mapping rooted at `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::from_files(
            YEARS
                .iter()
                .map(|&year| (year, data_dir.join(file_name_for(year)))),
        )
    }

    /// Build a mapping from explicit `(year, path)` pairs.
    fn from_files(files: impl IntoIterator<Item = (i32, PathBuf)>) -> Self {
        Self {
            files: files.into_iter().collect(),
        }
    }

    /// `(year, path)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &Path)> {
        self.files.iter().map(|(&year, path)| (year, path.as_path()))
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load every file in `sources`, failing on the first unreadable one.
pub fn load_datasets(sources: &DataSources) -> Result<YearlyDatasets> {
    let start = Instant::now();
    let mut datasets = YearlyDatasets::new();

    for (year, path) in sources.iter() {
        datasets.insert(year, load_year(year, path)?);
    }

    info!(
        "Loaded {} yearly datasets in {:.1}ms",
        datasets.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(datasets)
}

/// Load the dataset for `year` from the CSV file at `path`.
pub fn load_year(year: i32, path: &Path) -> Result<YearlyDataset> {
    let start = Instant::now();
    let file = File::open(path).map_err(|source| RainfallError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(file, path)?;
    let dataset = YearlyDataset::new(year, records);

    let mismatched = dataset.mismatched_year_count();
    if mismatched > 0 {
        warn!(
            "{} of {} rows in {} carry a year other than {}",
            mismatched,
            dataset.len(),
            path.display(),
            year
        );
    }

    info!(
        "Loaded {} records for {} from {} in {:.1}ms",
        dataset.len(),
        year,
        path.display(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(dataset)
}

/// Parse rainfall records from CSV text with a header row.
///
/// `path` is only used to label errors.
pub fn parse_records<R: Read>(input: R, path: &Path) -> Result<Vec<RainfallRecord>> {
    let csv_err = |source: csv::Error| RainfallError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Fields)
        .from_reader(input);

    let headers = rdr.headers().map_err(csv_err)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(RainfallError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let records = rdr
        .deserialize::<RainfallRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(csv_err)?;

    let missing = records.iter().filter(|r| r.amount_mm.is_none()).count();
    if missing > 0 {
        debug!(
            "{} rows without a rainfall amount in {}",
            missing,
            path.display()
        );
    }

    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
