//! The shared output region written by report handlers.
//!
//! The region is an ordered list of [`OutputBlock`]s. The TUI renders each
//! block as a widget; one-shot mode prints [`OutputRegion::to_plain_text`].

use rainfall_core::formatting::{format_amount, month_abbrev};
use rainfall_core::models::RainfallRecord;
use rainfall_data::aggregator::Histogram;

/// Column headers of a record listing.
pub const RECORD_COLUMNS: [&str; 4] = ["Year", "Month", "Day", "Rainfall amount (millimetres)"];

// ── Blocks ────────────────────────────────────────────────────────────────────

/// Series drawn by a [`ChartPanel`].
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    /// One bar per month: `(month, value)`.
    MonthlyBars(Vec<(u32, f64)>),
    /// A line with point markers through `(month, value)`.
    MonthlyLine(Vec<(u32, f64)>),
    /// Frequency of daily amounts.
    Histogram(Histogram),
}

/// A titled chart with axis labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub data: ChartData,
}

/// One unit of report output.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputBlock {
    /// A plain line of text; may be empty.
    Text(String),
    /// A highlighted message such as "no data" or an error.
    Notice(String),
    /// A Year / Month / Day / amount listing.
    Records(Vec<RainfallRecord>),
    Chart(ChartPanel),
}

impl OutputBlock {
    pub fn text(line: impl Into<String>) -> Self {
        OutputBlock::Text(line.into())
    }

    pub fn notice(line: impl Into<String>) -> Self {
        OutputBlock::Notice(line.into())
    }

    /// Plain-text lines for this block.
    pub fn plain_lines(&self) -> Vec<String> {
        match self {
            OutputBlock::Text(line) | OutputBlock::Notice(line) => vec![line.clone()],
            OutputBlock::Records(records) => record_table_lines(records),
            OutputBlock::Chart(panel) => chart_lines(panel),
        }
    }
}

// ── OutputRegion ──────────────────────────────────────────────────────────────

/// Append-only display buffer, cleared at the start of each selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputRegion {
    blocks: Vec<OutputBlock>,
}

impl OutputRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn push(&mut self, block: OutputBlock) {
        self.blocks.push(block);
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = OutputBlock>) {
        self.blocks.extend(blocks);
    }

    pub fn blocks(&self) -> &[OutputBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The region rendered as text lines joined by `\n`, without a trailing
    /// newline.
    pub fn to_plain_text(&self) -> String {
        self.blocks
            .iter()
            .flat_map(OutputBlock::plain_lines)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ── Plain-text helpers ────────────────────────────────────────────────────────

/// Right-aligned columns, one row per record.
fn record_table_lines(records: &[RainfallRecord]) -> Vec<String> {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.year.to_string(),
                r.month.to_string(),
                r.day.to_string(),
                r.amount_mm.map(format_amount).unwrap_or_else(|| "NaN".to_string()),
            ]
        })
        .collect();

    let mut widths = RECORD_COLUMNS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let fmt_row = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:>w$}", cell, w = w))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut lines = vec![fmt_row(RECORD_COLUMNS)];
    for row in &rows {
        lines.push(fmt_row([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
        ]));
    }
    lines
}

fn chart_lines(panel: &ChartPanel) -> Vec<String> {
    let mut lines = vec![
        panel.title.clone(),
        format!("  x: {}  |  y: {}", panel.x_label, panel.y_label),
    ];
    match &panel.data {
        ChartData::MonthlyBars(points) | ChartData::MonthlyLine(points) => {
            for (month, value) in points {
                lines.push(format!("  {:>3}  {:>10}", month_abbrev(*month), format_amount(*value)));
            }
        }
        ChartData::Histogram(hist) => {
            for (lo, hi, count) in hist.bins() {
                lines.push(format!(
                    "  {:>8} – {:>8}  {:>5}",
                    format_amount(lo),
                    format_amount(hi),
                    count
                ));
            }
        }
    }
    lines
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_clear_and_push() {
        let mut region = OutputRegion::new();
        assert!(region.is_empty());
        region.push(OutputBlock::text("hello"));
        region.push(OutputBlock::notice("careful"));
        assert_eq!(region.blocks().len(), 2);
        region.clear();
        assert!(region.is_empty());
    }

    #[test]
    fn test_plain_text_joins_without_trailing_newline() {
        let mut region = OutputRegion::new();
        region.extend([OutputBlock::text("a"), OutputBlock::text(""), OutputBlock::text("b")]);
        assert_eq!(region.to_plain_text(), "a\n\nb");
    }

    #[test]
    fn test_record_table_alignment() {
        let block = OutputBlock::Records(vec![RainfallRecord::new(2021, 1, 2, Some(25.0))]);
        let lines = block.plain_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Year  Month  Day  Rainfall amount (millimetres)");
        assert!(lines[1].starts_with("2021      1    2"));
        assert!(lines[1].ends_with("25.00"));
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn test_record_table_missing_amount() {
        let block = OutputBlock::Records(vec![RainfallRecord::new(2021, 1, 2, None)]);
        assert!(block.plain_lines()[1].ends_with("NaN"));
    }

    #[test]
    fn test_chart_lines_monthly() {
        let panel = ChartPanel {
            title: "Monthly Total Rainfall in 2021".to_string(),
            x_label: "Month".to_string(),
            y_label: "Total Rainfall (mm)".to_string(),
            data: ChartData::MonthlyBars(vec![(1, 30.0), (2, 0.0)]),
        };
        let lines = OutputBlock::Chart(panel).plain_lines();
        assert_eq!(lines[0], "Monthly Total Rainfall in 2021");
        assert!(lines[1].contains("Month"));
        assert!(lines[2].contains("Jan") && lines[2].ends_with("30.00"));
        assert!(lines[3].contains("Feb") && lines[3].ends_with("0.00"));
    }

    #[test]
    fn test_chart_lines_histogram_one_line_per_bin() {
        let hist = Histogram::from_values(&[0.0, 5.0, 10.0], 20).unwrap();
        let panel = ChartPanel {
            title: "Distribution of Daily Rainfall Amounts".to_string(),
            x_label: "Rainfall (mm)".to_string(),
            y_label: "Frequency".to_string(),
            data: ChartData::Histogram(hist),
        };
        assert_eq!(OutputBlock::Chart(panel).plain_lines().len(), 2 + 20);
    }
}
