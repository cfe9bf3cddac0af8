use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Decoration placed either side of the application title.
pub const DROPS: &str = "· ∘ · ∘";

/// Explorer header rendering three lines:
///
/// 1. Application title with decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Loaded years and data directory in `[ years | dir ]` format.
pub struct Header<'a> {
    /// Years with a loaded dataset, ascending.
    pub years: &'a [i32],
    /// Directory the CSV files were read from.
    pub data_dir: &'a str,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(years: &'a [i32], data_dir: &'a str, theme: &'a Theme) -> Self {
        Self {
            years,
            data_dir,
            theme,
        }
    }

    /// Number of terminal rows [`Header::to_lines`] occupies.
    pub const HEIGHT: u16 = 3;

    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let years = self
            .years
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        vec![
            Line::from(vec![
                Span::styled(DROPS, self.theme.header_sparkle),
                Span::styled(" RAINFALL EXPLORER ", self.theme.header),
                Span::styled(DROPS, self.theme.header_sparkle),
            ]),
            Line::from(Span::styled("=".repeat(60), self.theme.separator)),
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(years, self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(self.data_dir.to_string(), self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
