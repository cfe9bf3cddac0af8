//! Main application state and TUI event loop for Rainfall Explorer.
//!
//! [`App`] owns the theme, the dropdown and the [`AppContext`] built at
//! startup. Key presses drive the dropdown; a confirmed option is handed to
//! the controller, which rewrites the output region shown below the menu.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::Text,
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::{debug, info};

use rainfall_runtime::controller::AppContext;
use rainfall_runtime::menu::MenuOption;

use crate::components::dropdown::Dropdown;
use crate::components::header::Header;
use crate::output_view;
use crate::themes::Theme;

// ── App ───────────────────────────────────────────────────────────────────────

/// Rows moved by PageUp / PageDown.
const PAGE_ROWS: isize = 10;

/// Root application state for the Rainfall Explorer TUI.
pub struct App {
    pub theme: Theme,
    pub context: AppContext,
    pub dropdown: Dropdown,
    /// Directory shown in the header.
    pub data_dir: String,
    /// First output row on screen.
    pub scroll: usize,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    pub fn new(theme_name: &str, context: AppContext, data_dir: String) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            context,
            dropdown: Dropdown::new(),
            data_dir,
            scroll: 0,
            should_quit: false,
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the TUI until `q`, `Q`, `Ctrl+C` or a SIGINT.
    ///
    /// Pending key presses are drained without blocking, then the loop awaits
    /// the next tick raced against `tokio::signal::ctrl_c()`, so the runtime
    /// thread is never held. Every exit path restores the terminal. Selecting
    /// `Exit` only writes the exit message; the loop keeps running.
    pub async fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(50);
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        let result = loop {
            if let Err(e) = terminal.draw(|frame| self.render(frame)) {
                break Err(e);
            }

            if let Err(e) = self.drain_input() {
                break Err(e);
            }
            if self.should_quit {
                break Ok(());
            }

            if wait_for_tick(tick_rate, shutdown.as_mut()).await == Wake::Shutdown {
                info!("Ctrl+C received; shutting down");
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Handle every key press already queued, without waiting for more.
    fn drain_input(&mut self) -> io::Result<()> {
        while !self.should_quit && event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ if self.dropdown.is_open() => self.handle_dropdown_key(key.code),
            KeyCode::Enter | KeyCode::Char(' ') => self.dropdown.open(),
            KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(PAGE_ROWS),
            KeyCode::PageUp => self.scroll_by(-PAGE_ROWS),
            _ => {}
        }
    }

    fn handle_dropdown_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.dropdown.highlight_previous(),
            KeyCode::Down => self.dropdown.highlight_next(),
            KeyCode::Esc => self.dropdown.close(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let option = self.dropdown.confirm();
                self.select(option);
            }
            _ => {}
        }
    }

    /// Hand `option` to the controller and return to the top of the output.
    pub fn select(&mut self, option: MenuOption) {
        debug!(selection = option.label(), "option confirmed");
        self.context.handle_selection(option);
        self.scroll = 0;
    }

    fn scroll_by(&mut self, delta: isize) {
        let last = output_view::total_height(self.context.output()).saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(last);
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render header, dropdown field and output region into `frame`.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Header::HEIGHT),
                Constraint::Length(Dropdown::FIELD_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);

        let years = self.context.years();
        let header = Header::new(&years, &self.data_dir, &self.theme);
        frame.render_widget(Paragraph::new(Text::from(header.to_lines())), chunks[0]);

        self.dropdown.render_field(frame, chunks[1], &self.theme);
        output_view::render_output(frame, chunks[2], self.context.output(), self.scroll, &self.theme);

        // Drawn last so the list sits over the output region.
        self.dropdown.render_list(frame, chunks[1], area, &self.theme);
    }
}

// ── Tick ──────────────────────────────────────────────────────────────────────

/// What ended a wait between input polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wake {
    Tick,
    Shutdown,
}

/// Sleep for `tick`, returning early when `shutdown` completes.
async fn wait_for_tick<F>(tick: Duration, shutdown: Pin<&mut F>) -> Wake
where
    F: Future<Output = io::Result<()>>,
{
    tokio::select! {
        _ = shutdown => Wake::Shutdown,
        _ = tokio::time::sleep(tick) => Wake::Tick,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
