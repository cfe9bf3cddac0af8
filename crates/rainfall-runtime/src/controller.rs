//! Application context and menu controller.
//!
//! [`AppContext`] is built once at startup from the loaded datasets and then
//! handed to whichever front end drives it (the TUI event loop or the
//! one-shot `--report` mode). Every selection clears the output region and
//! runs to completion before the next one is handled.

use rainfall_core::models::YearlyDatasets;
use tracing::{debug, info, warn};

use crate::menu::{MenuOption, ReportKind};
use crate::output::{OutputBlock, OutputRegion};

/// Line written to the output region when `Exit` is selected.
pub const EXIT_MESSAGE: &str = "Exiting the program.";

// ── ControllerState ───────────────────────────────────────────────────────────

/// Whether a selection is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Nothing selected yet, or the placeholder was re-selected.
    Idle,
    /// The output region holds the result of this selection.
    Reporting(MenuOption),
}

// ── AppContext ────────────────────────────────────────────────────────────────

/// Loaded datasets plus the controller state and output region.
#[derive(Debug)]
pub struct AppContext {
    datasets: YearlyDatasets,
    state: ControllerState,
    output: OutputRegion,
}

impl AppContext {
    pub fn new(datasets: YearlyDatasets) -> Self {
        Self {
            datasets,
            state: ControllerState::Idle,
            output: OutputRegion::new(),
        }
    }

    pub fn datasets(&self) -> &YearlyDatasets {
        &self.datasets
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn output(&self) -> &OutputRegion {
        &self.output
    }

    /// Years available, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.datasets.keys().copied().collect()
    }

    /// Apply one menu selection.
    ///
    /// Report options run for every loaded year in ascending order. `Exit`
    /// writes [`EXIT_MESSAGE`] and nothing else. The placeholder leaves the
    /// region empty.
    pub fn handle_selection(&mut self, option: MenuOption) {
        self.output.clear();

        match option {
            MenuOption::VisualizeRainfallData => self.run_report(option, ReportKind::Visualize),
            MenuOption::ShowBasicStatistics => self.run_report(option, ReportKind::Statistics),
            MenuOption::ShowHighRainfallDays => self.run_report(option, ReportKind::HighRainfall),
            MenuOption::Exit => {
                info!("exit selected");
                self.output.push(OutputBlock::text(EXIT_MESSAGE));
                self.state = ControllerState::Reporting(option);
            }
            MenuOption::SelectOption => {
                debug!("placeholder selected; nothing to report");
                self.state = ControllerState::Idle;
            }
        }
    }

    fn run_report(&mut self, option: MenuOption, kind: ReportKind) {
        info!(selection = option.label(), years = self.datasets.len(), "running report");
        for (&year, dataset) in &self.datasets {
            self.output.extend(kind.run(year, dataset));
        }
        self.state = ControllerState::Reporting(option);
    }

    /// Apply a selection given by its label or short key.
    ///
    /// An unknown label clears the region and shows an error notice instead.
    pub fn handle_label(&mut self, label: &str) {
        match label.parse::<MenuOption>() {
            Ok(option) => self.handle_selection(option),
            Err(e) => {
                warn!(label, "unrecognized menu selection");
                self.output.clear();
                self.output.push(OutputBlock::notice(e.to_string()));
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rainfall_core::models::{RainfallRecord, YearlyDataset};

    fn datasets() -> YearlyDatasets {
        let mut map = YearlyDatasets::new();
        // Inserted out of order on purpose.
        map.insert(
            2022,
            YearlyDataset::new(2022, vec![RainfallRecord::new(2022, 3, 3, Some(42.0))]),
        );
        map.insert(
            2021,
            YearlyDataset::new(
                2021,
                vec![
                    RainfallRecord::new(2021, 1, 1, Some(5.0)),
                    RainfallRecord::new(2021, 1, 2, Some(25.0)),
                    RainfallRecord::new(2021, 2, 1, Some(0.0)),
                ],
            ),
        );
        map.insert(2023, YearlyDataset::new(2023, vec![]));
        map
    }

    fn header_lines(ctx: &AppContext, prefix: &str) -> Vec<String> {
        ctx.output()
            .blocks()
            .iter()
            .filter_map(|b| match b {
                OutputBlock::Text(t) if t.starts_with(prefix) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    // ── Initial state ─────────────────────────────────────────────────────────

    #[test]
    fn test_new_context_is_idle_and_empty() {
        let ctx = AppContext::new(datasets());
        assert_eq!(ctx.state(), ControllerState::Idle);
        assert!(ctx.output().is_empty());
        assert_eq!(ctx.years(), vec![2021, 2022, 2023]);
    }

    // ── Report selections ─────────────────────────────────────────────────────

    #[test]
    fn test_statistics_runs_for_every_year_in_order() {
        let mut ctx = AppContext::new(datasets());
        ctx.handle_selection(MenuOption::ShowBasicStatistics);
        assert_eq!(
            header_lines(&ctx, "Statistics for"),
            vec![
                "Statistics for 2021:".to_string(),
                "Statistics for 2022:".to_string(),
                "Statistics for 2023:".to_string(),
            ]
        );
        assert_eq!(
            ctx.state(),
            ControllerState::Reporting(MenuOption::ShowBasicStatistics)
        );
    }

    #[test]
    fn test_each_report_option_runs_its_report() {
        let cases = [
            (MenuOption::VisualizeRainfallData, "Monthly Total Rainfall in 2021"),
            (MenuOption::ShowBasicStatistics, "Statistics for 2021:"),
            (MenuOption::ShowHighRainfallDays, "Days with rainfall above 20mm in 2021:"),
        ];
        for (option, heading) in cases {
            let mut ctx = AppContext::new(datasets());
            ctx.handle_selection(option);
            assert!(
                ctx.output().to_plain_text().contains(heading),
                "{} did not produce {:?}",
                option.label(),
                heading
            );
            assert_eq!(ctx.state(), ControllerState::Reporting(option));
        }
    }

    #[test]
    fn test_empty_year_does_not_abort_other_years() {
        let mut ctx = AppContext::new(datasets());
        ctx.handle_selection(MenuOption::ShowBasicStatistics);
        let text = ctx.output().to_plain_text();
        assert!(text.contains("Total Rainfall: 30.00"));
        assert!(text.contains("Total Rainfall: 42.00"));
        assert!(text.contains("No data available for 2023."));
    }

    #[test]
    fn test_high_rainfall_lists_rows_per_year() {
        let mut ctx = AppContext::new(datasets());
        ctx.handle_selection(MenuOption::ShowHighRainfallDays);
        let records: Vec<&OutputBlock> = ctx
            .output()
            .blocks()
            .iter()
            .filter(|b| matches!(b, OutputBlock::Records(_)))
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            &OutputBlock::Records(vec![RainfallRecord::new(2021, 1, 2, Some(25.0))])
        );
        assert!(ctx
            .output()
            .to_plain_text()
            .contains("Days with rainfall above 20mm in 2023:\nNo days with rainfall above 20mm."));
    }

    #[test]
    fn test_visualize_produces_charts() {
        let mut ctx = AppContext::new(datasets());
        ctx.handle_selection(MenuOption::VisualizeRainfallData);
        let charts = ctx
            .output()
            .blocks()
            .iter()
            .filter(|b| matches!(b, OutputBlock::Chart(_)))
            .count();
        // Two years with data, three charts each; 2023 gets a notice.
        assert_eq!(charts, 6);
        assert!(ctx
            .output()
            .blocks()
            .contains(&OutputBlock::notice("No rainfall data to plot for 2023.")));
    }

    #[test]
    fn test_new_selection_clears_previous_output() {
        let mut ctx = AppContext::new(datasets());
        ctx.handle_selection(MenuOption::ShowBasicStatistics);
        ctx.handle_selection(MenuOption::ShowHighRainfallDays);
        assert!(header_lines(&ctx, "Statistics for").is_empty());
        assert_eq!(header_lines(&ctx, "Days with rainfall").len(), 3);
    }

    #[test]
    fn test_repeated_selection_is_identical() {
        let mut ctx = AppContext::new(datasets());
        ctx.handle_selection(MenuOption::ShowBasicStatistics);
        let first = ctx.output().clone();
        ctx.handle_selection(MenuOption::ShowBasicStatistics);
        assert_eq!(ctx.output(), &first);
    }

    // ── Exit / placeholder ────────────────────────────────────────────────────

    #[test]
    fn test_exit_writes_only_the_exit_message() {
        let mut ctx = AppContext::new(datasets());
        ctx.handle_selection(MenuOption::ShowBasicStatistics);
        ctx.handle_selection(MenuOption::Exit);
        assert_eq!(ctx.output().to_plain_text(), "Exiting the program.");
        assert_eq!(ctx.output().blocks().len(), 1);
        assert_eq!(ctx.state(), ControllerState::Reporting(MenuOption::Exit));
    }

    #[test]
    fn test_controller_keeps_working_after_exit() {
        let mut ctx = AppContext::new(datasets());
        ctx.handle_selection(MenuOption::Exit);
        ctx.handle_selection(MenuOption::ShowHighRainfallDays);
        assert_eq!(header_lines(&ctx, "Days with rainfall").len(), 3);
    }

    #[test]
    fn test_placeholder_clears_and_returns_to_idle() {
        let mut ctx = AppContext::new(datasets());
        ctx.handle_selection(MenuOption::ShowBasicStatistics);
        ctx.handle_selection(MenuOption::SelectOption);
        assert!(ctx.output().is_empty());
        assert_eq!(ctx.state(), ControllerState::Idle);
    }

    // ── handle_label ──────────────────────────────────────────────────────────

    #[test]
    fn test_handle_label_dispatches() {
        let mut ctx = AppContext::new(datasets());
        ctx.handle_label("Exit");
        assert_eq!(ctx.output().to_plain_text(), EXIT_MESSAGE);
        ctx.handle_label("statistics");
        assert_eq!(header_lines(&ctx, "Statistics for").len(), 3);
    }

    #[test]
    fn test_handle_label_unrecognized_shows_notice() {
        let mut ctx = AppContext::new(datasets());
        ctx.handle_selection(MenuOption::ShowBasicStatistics);
        ctx.handle_label("Plot Everything");
        assert_eq!(
            ctx.output().blocks(),
            &[OutputBlock::notice("Unrecognized selection: Plot Everything")]
        );
        // State still reflects the last valid selection.
        assert_eq!(
            ctx.state(),
            ControllerState::Reporting(MenuOption::ShowBasicStatistics)
        );
    }
}
