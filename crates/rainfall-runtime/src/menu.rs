//! Menu options and the report each one dispatches to.

use std::fmt;
use std::str::FromStr;

use rainfall_core::error::RainfallError;
use rainfall_core::models::YearlyDataset;

use crate::output::OutputBlock;
use crate::reports;

// ── ReportKind ────────────────────────────────────────────────────────────────

/// The three per-year reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Visualize,
    Statistics,
    HighRainfall,
}

impl ReportKind {
    /// Build this report for one year.
    pub fn run(self, year: i32, dataset: &YearlyDataset) -> Vec<OutputBlock> {
        match self {
            ReportKind::Visualize => reports::chart_report(year, dataset),
            ReportKind::Statistics => reports::statistics_report(year, dataset),
            ReportKind::HighRainfall => reports::high_rainfall_report(year, dataset),
        }
    }
}

// ── MenuOption ────────────────────────────────────────────────────────────────

/// Entries of the dropdown menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Placeholder shown before any choice is made.
    SelectOption,
    VisualizeRainfallData,
    ShowBasicStatistics,
    ShowHighRainfallDays,
    Exit,
}

impl MenuOption {
    /// All options in the order the dropdown lists them.
    pub const ALL: [MenuOption; 5] = [
        MenuOption::SelectOption,
        MenuOption::VisualizeRainfallData,
        MenuOption::ShowBasicStatistics,
        MenuOption::ShowHighRainfallDays,
        MenuOption::Exit,
    ];

    /// Text shown in the dropdown.
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::SelectOption => "Select Option",
            MenuOption::VisualizeRainfallData => "Visualize Rainfall Data",
            MenuOption::ShowBasicStatistics => "Show Basic Statistics",
            MenuOption::ShowHighRainfallDays => "Show Days with Rainfall > 20mm",
            MenuOption::Exit => "Exit",
        }
    }

    /// Short key accepted by `--report`.
    pub fn key(self) -> &'static str {
        match self {
            MenuOption::SelectOption => "select",
            MenuOption::VisualizeRainfallData => "visualize",
            MenuOption::ShowBasicStatistics => "statistics",
            MenuOption::ShowHighRainfallDays => "high-rainfall",
            MenuOption::Exit => "exit",
        }
    }

    /// Position of this option in [`MenuOption::ALL`].
    pub fn index(self) -> usize {
        MenuOption::ALL
            .iter()
            .position(|&o| o == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MenuOption {
    type Err = RainfallError;

    /// Match a dropdown label exactly, or a short key case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MenuOption::ALL
            .into_iter()
            .find(|o| o.label() == trimmed || o.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RainfallError::UnrecognizedSelection(trimmed.to_string()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
