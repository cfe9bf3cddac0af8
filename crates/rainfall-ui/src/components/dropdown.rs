//! The option dropdown: a one-line field that expands into a list.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use rainfall_runtime::menu::MenuOption;

use crate::themes::Theme;

/// Width of the field and its expanded list.
const WIDTH: u16 = 48;

/// Dropdown state: the shown option, whether the list is open and which
/// entry is highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    selected: MenuOption,
    open: bool,
    highlight: usize,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self {
            selected: MenuOption::SelectOption,
            open: false,
            highlight: 0,
        }
    }
}

impl Dropdown {
    /// Rows taken by the closed field, borders included.
    pub const FIELD_HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> MenuOption {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> MenuOption {
        MenuOption::ALL[self.highlight]
    }

    /// Expand the list with the current selection highlighted.
    pub fn open(&mut self) {
        self.open = true;
        self.highlight = self.selected.index();
    }

    /// Collapse the list without changing the selection.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn highlight_previous(&mut self) {
        self.highlight = self.highlight.saturating_sub(1);
    }

    pub fn highlight_next(&mut self) {
        self.highlight = (self.highlight + 1).min(MenuOption::ALL.len() - 1);
    }

    /// Take the highlighted entry as the new selection and collapse.
    pub fn confirm(&mut self) -> MenuOption {
        self.selected = self.highlighted();
        self.open = false;
        self.selected
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Draw the collapsed field into `area`.
    pub fn render_field(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let style = if self.selected == MenuOption::SelectOption {
            theme.menu_placeholder
        } else {
            theme.menu_item
        };
        let arrow = if self.open { " ▲" } else { " ▼" };
        let line = Line::from(vec![
            Span::styled("Options: ", theme.label),
            Span::styled(self.selected.label(), style),
            Span::styled(arrow, theme.dim),
        ]);
        let field = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border),
        );
        frame.render_widget(field, Rect { width: area.width.min(WIDTH), ..area });
    }

    /// Draw the expanded list just below `field`, clipped to `bounds`.
    /// Does nothing while collapsed.
    pub fn render_list(&self, frame: &mut Frame, field: Rect, bounds: Rect, theme: &Theme) {
        if !self.open {
            return;
        }
        let list_area = list_rect(field, bounds);
        if list_area.height == 0 {
            return;
        }

        let lines: Vec<Line> = MenuOption::ALL
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let style = if i == self.highlight {
                    theme.menu_highlight
                } else if *option == MenuOption::SelectOption {
                    theme.menu_placeholder
                } else {
                    theme.menu_item
                };
                Line::from(Span::styled(format!(" {} ", option.label()), style))
            })
            .collect();

        frame.render_widget(Clear, list_area);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border),
            ),
            list_area,
        );
    }
}

/// Area of the expanded list: directly under the field, clipped to `bounds`.
fn list_rect(field: Rect, bounds: Rect) -> Rect {
    let y = field.y.saturating_add(field.height);
    let bottom = bounds.y.saturating_add(bounds.height);
    let wanted = MenuOption::ALL.len() as u16 + 2;
    Rect {
        x: field.x,
        y,
        width: field.width.min(WIDTH),
        height: wanted.min(bottom.saturating_sub(y)),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ── State ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_default_is_placeholder_and_closed() {
        let d = Dropdown::new();
        assert_eq!(d.selected(), MenuOption::SelectOption);
        assert!(!d.is_open());
    }

    #[test]
    fn test_open_highlights_current_selection() {
        let mut d = Dropdown::new();
        d.open();
        d.highlight_next();
        d.highlight_next();
        assert_eq!(d.confirm(), MenuOption::ShowBasicStatistics);
        d.open();
        assert_eq!(d.highlighted(), MenuOption::ShowBasicStatistics);
    }

    #[test]
    fn test_highlight_is_clamped() {
        let mut d = Dropdown::new();
        d.open();
        d.highlight_previous();
        assert_eq!(d.highlighted(), MenuOption::SelectOption);
        for _ in 0..10 {
            d.highlight_next();
        }
        assert_eq!(d.highlighted(), MenuOption::Exit);
    }

    #[test]
    fn test_close_keeps_selection() {
        let mut d = Dropdown::new();
        d.open();
        d.highlight_next();
        d.close();
        assert!(!d.is_open());
        assert_eq!(d.selected(), MenuOption::SelectOption);
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    #[test]
    fn test_render_field_shows_selection() {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        let theme = Theme::dark();
        let d = Dropdown::new();
        terminal
            .draw(|frame| d.render_field(frame, frame.area(), &theme))
            .unwrap();
        assert!(screen(&terminal).contains("Options: Select Option"));
    }

    #[test]
    fn test_render_list_shows_every_option() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let theme = Theme::dark();
        let mut d = Dropdown::new();
        d.open();
        terminal
            .draw(|frame| {
                let field = Rect::new(0, 0, 60, Dropdown::FIELD_HEIGHT);
                d.render_field(frame, field, &theme);
                d.render_list(frame, field, frame.area(), &theme);
            })
            .unwrap();
        let text = screen(&terminal);
        for option in MenuOption::ALL {
            assert!(text.contains(option.label()), "missing {}", option.label());
        }
    }

    #[test]
    fn test_list_rect_is_clipped() {
        let field = Rect::new(0, 0, 80, 3);
        let bounds = Rect::new(0, 0, 80, 6);
        let r = list_rect(field, bounds);
        assert_eq!(r.y, 3);
        assert_eq!(r.height, 3);
        assert_eq!(r.width, WIDTH);
    }
}
