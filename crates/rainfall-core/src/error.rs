use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by Rainfall Explorer.
#[derive(Error, Debug)]
pub enum RainfallError {
    /// A data file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file is not valid CSV or a row does not fit the record layout.
    #[error("Failed to parse CSV in {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A data file lacks one of the required header columns.
    #[error("Missing column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// A report was requested for a year without any rainfall values.
    #[error("No data available for {year}.")]
    EmptyDataset { year: i32 },

    /// A menu label that does not match any option.
    #[error("Unrecognized selection: {0}")]
    UnrecognizedSelection(String),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RainfallError {
    /// `true` for the errors raised while loading the yearly CSV files.
    ///
    /// These abort startup; every other variant is reported in place.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            RainfallError::FileRead { .. }
                | RainfallError::CsvParse { .. }
                | RainfallError::MissingColumn { .. }
        )
    }
}

/// Convenience alias used throughout the rainfall crates.
pub type Result<T> = std::result::Result<T, RainfallError>;
