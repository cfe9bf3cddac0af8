//! Renders the output region as a vertical stack of widgets.
//!
//! Lines and notices take one row each, record listings become a
//! [`ratatui::widgets::Table`], and charts are delegated to
//! [`crate::chart_view`]. The scroll offset counts screen rows, so a long
//! listing can be scrolled row by row.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use rainfall_core::formatting::format_amount;
use rainfall_core::models::RainfallRecord;
use rainfall_runtime::output::{OutputBlock, OutputRegion, RECORD_COLUMNS};

use crate::chart_view::{self, CHART_HEIGHT};
use crate::themes::Theme;

/// Rows a block needs on screen.
pub fn block_height(block: &OutputBlock) -> u16 {
    match block {
        OutputBlock::Text(_) | OutputBlock::Notice(_) => 1,
        OutputBlock::Records(records) => (records.len() as u16).saturating_add(1),
        OutputBlock::Chart(_) => CHART_HEIGHT,
    }
}

/// Rows the whole region needs on screen.
pub fn total_height(region: &OutputRegion) -> usize {
    region.blocks().iter().map(|b| usize::from(block_height(b))).sum()
}

/// Render `region` into `area`, skipping the first `scroll` rows.
///
/// A block cut by the scroll offset is drawn from the matching row; record
/// listings keep their header row.
pub fn render_output(frame: &mut Frame, area: Rect, region: &OutputRegion, scroll: usize, theme: &Theme) {
    if region.is_empty() {
        render_hint(frame, area, theme);
        return;
    }

    let bottom = area.y.saturating_add(area.height);
    let mut y = area.y;
    let mut skip = scroll;
    for block in region.blocks() {
        let full = usize::from(block_height(block));
        if skip >= full {
            skip -= full;
            continue;
        }
        if y >= bottom {
            break;
        }
        let offset = skip;
        skip = 0;
        let remaining = u16::try_from(full - offset).unwrap_or(u16::MAX);
        let height = remaining.min(bottom - y);
        let slot = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        render_block(frame, slot, block, offset, theme);
        y = y.saturating_add(height);
    }
}

fn render_block(frame: &mut Frame, area: Rect, block: &OutputBlock, offset: usize, theme: &Theme) {
    match block {
        OutputBlock::Text(line) => {
            frame.render_widget(Paragraph::new(Span::styled(line.as_str(), theme.text)), area);
        }
        OutputBlock::Notice(line) => {
            frame.render_widget(Paragraph::new(Span::styled(line.as_str(), theme.notice)), area);
        }
        OutputBlock::Records(records) => render_records(frame, area, records, offset, theme),
        OutputBlock::Chart(panel) => chart_view::render_chart(frame, area, panel, theme),
    }
}

fn render_records(
    frame: &mut Frame,
    area: Rect,
    records: &[RainfallRecord],
    offset: usize,
    theme: &Theme,
) {
    let header = Row::new(
        RECORD_COLUMNS
            .iter()
            .map(|h| Cell::from(*h).style(theme.table_header)),
    )
    .height(1);

    let rows: Vec<Row> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Row::new(vec![
                Cell::from(r.year.to_string()),
                Cell::from(r.month.to_string()),
                Cell::from(r.day.to_string()),
                Cell::from(r.amount_mm.map(format_amount).unwrap_or_else(|| "NaN".to_string())),
            ])
            .style(theme.row_style(i))
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Length(30),
    ];

    let table = Table::new(rows, widths).header(header).style(theme.text);
    let mut state = TableState::default().with_offset(offset);
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_hint(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to open the menu and choose a report.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to quit", theme.dim)),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
