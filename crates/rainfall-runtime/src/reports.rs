//! Per-year report builders.
//!
//! Each builder turns one yearly dataset into the blocks appended to the
//! output region. Report-level errors become a visible notice so that one
//! bad year never aborts the others.

use rainfall_core::error::Result;
use rainfall_core::formatting::{format_amount, format_optional_amount};
use rainfall_core::models::{YearlyDataset, HIGH_RAINFALL_THRESHOLD_MM};
use rainfall_core::statistics::StatisticsSummary;
use rainfall_data::aggregator::{monthly_means, monthly_totals, Histogram};
use rainfall_data::threshold::days_above;
use tracing::{debug, warn};

use crate::output::{ChartData, ChartPanel, OutputBlock};

// ── Statistics ────────────────────────────────────────────────────────────────

/// "Statistics for <year>:" followed by each figure and the max-rainfall days.
pub fn statistics_report(year: i32, dataset: &YearlyDataset) -> Vec<OutputBlock> {
    let mut blocks = vec![OutputBlock::text(format!("Statistics for {}:", year))];
    blocks.extend(caught(year, statistics_body(year, dataset)));
    blocks.push(OutputBlock::text(""));
    blocks
}

fn statistics_body(year: i32, dataset: &YearlyDataset) -> Result<Vec<OutputBlock>> {
    let summary = StatisticsSummary::compute(dataset)?;
    debug!(year, count = summary.count, "statistics computed");

    Ok(vec![
        OutputBlock::text(format!("Total Rainfall: {}", format_amount(summary.total))),
        OutputBlock::text(format!("Mean Rainfall: {}", format_amount(summary.mean))),
        OutputBlock::text(format!("Median Rainfall: {}", format_amount(summary.median))),
        OutputBlock::text(format!("Mode Rainfall: {}", format_amount(summary.mode))),
        OutputBlock::text(format!(
            "Standard Deviation: {}",
            format_optional_amount(summary.std_dev)
        )),
        OutputBlock::text(format!(
            "Variance: {}",
            format_optional_amount(summary.variance)
        )),
        OutputBlock::text("Day with Maximum Rainfall:"),
        OutputBlock::Records(summary.max_records),
    ])
}

// ── Charts ────────────────────────────────────────────────────────────────────

/// Monthly totals, monthly averages and the daily distribution, in that order.
pub fn chart_report(year: i32, dataset: &YearlyDataset) -> Vec<OutputBlock> {
    let Some(histogram) = Histogram::of_dataset(dataset) else {
        warn!(year, "no rainfall values to plot");
        return vec![
            OutputBlock::notice(format!("No rainfall data to plot for {}.", year)),
            OutputBlock::text(""),
        ];
    };

    vec![
        OutputBlock::Chart(ChartPanel {
            title: format!("Monthly Total Rainfall in {}", year),
            x_label: "Month".to_string(),
            y_label: "Total Rainfall (mm)".to_string(),
            data: ChartData::MonthlyBars(monthly_totals(dataset)),
        }),
        OutputBlock::Chart(ChartPanel {
            title: format!("Monthly Average Rainfall in {}", year),
            x_label: "Month".to_string(),
            y_label: "Average Rainfall (mm)".to_string(),
            data: ChartData::MonthlyLine(monthly_means(dataset)),
        }),
        OutputBlock::Chart(ChartPanel {
            title: "Distribution of Daily Rainfall Amounts".to_string(),
            x_label: "Rainfall (mm)".to_string(),
            y_label: "Frequency".to_string(),
            data: ChartData::Histogram(histogram),
        }),
    ]
}

// ── High rainfall days ────────────────────────────────────────────────────────

/// Days above [`HIGH_RAINFALL_THRESHOLD_MM`], or a "no days" line.
pub fn high_rainfall_report(year: i32, dataset: &YearlyDataset) -> Vec<OutputBlock> {
    let days = days_above(dataset, HIGH_RAINFALL_THRESHOLD_MM);
    let listing = if days.is_empty() {
        OutputBlock::text("No days with rainfall above 20mm.")
    } else {
        OutputBlock::Records(days)
    };
    vec![
        OutputBlock::text(format!("Days with rainfall above 20mm in {}:", year)),
        listing,
        OutputBlock::text(""),
    ]
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Turn a failed report body into a notice carrying the error message.
fn caught(year: i32, body: Result<Vec<OutputBlock>>) -> Vec<OutputBlock> {
    body.unwrap_or_else(|e| {
        warn!(year, error = %e, "report failed");
        vec![OutputBlock::notice(e.to_string())]
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
