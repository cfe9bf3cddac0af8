//! Chart widgets for the "Visualize Rainfall Data" report.
//!
//! Monthly totals and the daily distribution are drawn as
//! [`ratatui::widgets::BarChart`]s; monthly averages are a
//! [`ratatui::widgets::Chart`] with a line dataset plus a scatter dataset
//! for the point markers.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use rainfall_core::formatting::{format_amount, month_abbrev};
use rainfall_runtime::data::aggregator::Histogram;
use rainfall_runtime::output::{ChartData, ChartPanel};

use crate::themes::Theme;

/// Rows given to each chart, borders included.
pub const CHART_HEIGHT: u16 = 14;

/// Bar heights are integers; amounts are stored in tenths of a millimetre.
const BAR_SCALE: f64 = 10.0;

/// Render one chart panel into `area`.
pub fn render_chart(frame: &mut Frame, area: Rect, panel: &ChartPanel, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled(format!(" {} ", panel.title), theme.header))
        .title_bottom(Line::from(Span::styled(
            format!(" x: {}  y: {} ", panel.x_label, panel.y_label),
            theme.dim,
        )));

    match &panel.data {
        ChartData::MonthlyBars(points) => {
            frame.render_widget(monthly_bar_chart(points, theme).block(block), area);
        }
        ChartData::MonthlyLine(points) => render_line_chart(frame, area, points, panel, block, theme),
        ChartData::Histogram(hist) => {
            let inner_width = area.width.saturating_sub(2);
            frame.render_widget(histogram_chart(hist, inner_width, theme).block(block), area);
        }
    }
}

fn monthly_bar_chart<'a>(points: &[(u32, f64)], theme: &Theme) -> BarChart<'a> {
    let bars: Vec<Bar> = points
        .iter()
        .map(|&(month, value)| {
            Bar::default()
                .value(scaled(value))
                .text_value(format_amount(value))
                .label(Line::from(month_abbrev(month)))
                .style(theme.chart_bar)
        })
        .collect();

    BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1)
        .bar_style(theme.chart_bar)
        .value_style(theme.value)
        .label_style(theme.chart_axis)
}

fn histogram_chart<'a>(hist: &Histogram, inner_width: u16, theme: &Theme) -> BarChart<'a> {
    let bins = hist.counts.len().max(1) as u16;
    let bar_width = (inner_width / bins).saturating_sub(1).max(1);

    let bars: Vec<Bar> = hist
        .bins()
        .map(|(lo, _hi, count)| {
            Bar::default()
                .value(count)
                .label(Line::from(format!("{:.0}", lo)))
                .style(theme.chart_histogram)
        })
        .collect();

    BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(theme.chart_histogram)
        .value_style(theme.value)
        .label_style(theme.chart_axis)
}

fn render_line_chart(
    frame: &mut Frame,
    area: Rect,
    points: &[(u32, f64)],
    panel: &ChartPanel,
    block: Block,
    theme: &Theme,
) {
    let series = line_points(points);
    let (x_bounds, y_bounds) = line_bounds(points);

    let x_labels: Vec<Span> = [points.first(), points.last()]
        .into_iter()
        .flatten()
        .map(|&(m, _)| Span::styled(month_abbrev(m), theme.chart_axis))
        .collect();
    let y_labels = vec![
        Span::styled(format_amount(y_bounds[0]), theme.chart_axis),
        Span::styled(format_amount(y_bounds[1]), theme.chart_axis),
    ];

    let datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme.chart_line)
            .data(&series),
        Dataset::default()
            .name(panel.y_label.clone())
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(theme.chart_marker)
            .data(&series),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(axis(&panel.x_label, x_bounds, x_labels, theme.chart_axis))
        .y_axis(axis(&panel.y_label, y_bounds, y_labels, theme.chart_axis));

    frame.render_widget(chart, area);
}

fn axis<'a>(title: &str, bounds: [f64; 2], labels: Vec<Span<'a>>, style: Style) -> Axis<'a> {
    Axis::default()
        .title(Span::styled(title.to_string(), style))
        .style(style)
        .bounds(bounds)
        .labels(labels)
}

// ── Series helpers ────────────────────────────────────────────────────────────

fn scaled(value: f64) -> u64 {
    (value.max(0.0) * BAR_SCALE).round() as u64
}

fn line_points(points: &[(u32, f64)]) -> Vec<(f64, f64)> {
    points.iter().map(|&(m, v)| (m as f64, v)).collect()
}

/// Axis bounds for the monthly line: half a month of padding on x, zero to
/// the peak plus ten percent on y.
fn line_bounds(points: &[(u32, f64)]) -> ([f64; 2], [f64; 2]) {
    let first = points.first().map_or(1.0, |p| p.0 as f64);
    let last = points.last().map_or(12.0, |p| p.0 as f64);
    let peak = points.iter().map(|p| p.1).fold(0.0_f64, f64::max);
    let top = if peak > 0.0 { peak * 1.1 } else { 1.0 };
    ([first - 0.5, last + 0.5], [0.0, top])
}

// ── Tests ─────────────────────────────────────────────────────────────────────
