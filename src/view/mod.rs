//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod contacts;
mod document;
mod footer;
mod grid;
mod heading;
mod help;
mod hero;
mod metrics;
mod paint;
mod skills;
mod status_bar;
mod styles;
mod text;

pub use document::{render_document, resolve_document_layout, Document};
pub use grid::{place_cards, GridPlacement};
pub use help::render_help_overlay;
pub use metrics::CellMetrics;
pub use status_bar::{scroll_position, status_text};
pub use styles::{ColorConfig, Theme};
pub use text::{display_width, heading_text, letter_spaced, wrap_words};

use crate::config::keybindings::KeyBindings;
use crate::config::ResolvedConfig;
use crate::layout::LayoutConfig;
use crate::links::UriOpener;
use crate::model::{KeyAction, LinkRef, Portfolio};
use crate::state::{handle_link_action, handle_scroll_action, link_at, AppState, StatusMessage};
use self::constants::{MOUSE_SCROLL_ROWS, STATUS_BAR_HEIGHT};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend, TestBackend},
    buffer::Buffer,
    layout::Rect,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Rendering settings resolved from configuration.
#[derive(Debug, Clone, Default)]
pub struct ViewConfig {
    pub layout: LayoutConfig,
    pub metrics: CellMetrics,
    pub theme: Theme,
}

impl ViewConfig {
    /// Settings for `config`, honouring `NO_COLOR`.
    pub fn from_resolved(config: &ResolvedConfig) -> Self {
        Self {
            layout: config.layout.clone(),
            metrics: CellMetrics::new(config.cell_width, config.cell_height),
            theme: Theme::for_color_config(ColorConfig::from_env_and_args(config.no_color)),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    key_bindings: KeyBindings,
    view: ViewConfig,
    opener: Box<dyn UriOpener>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(
        portfolio: Portfolio,
        view: ViewConfig,
        opener: Box<dyn UriOpener>,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, portfolio, view, opener))
    }

    /// Run the main event loop
    ///
    /// Blocks on terminal events; every handled event is followed by one
    /// redraw. Returns when the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// App over an already initialized terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        portfolio: Portfolio,
        view: ViewConfig,
        opener: Box<dyn UriOpener>,
    ) -> Self {
        Self {
            terminal,
            state: AppState::new(portfolio),
            key_bindings: KeyBindings::default(),
            view,
            opener,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        // Ctrl+C always quits, even if rebound
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(KeyEvent::new(key.code, key.modifiers)) else {
            return false;
        };

        // The help overlay swallows everything but closing it and quitting
        if self.state.help_visible {
            match action {
                KeyAction::Quit => return true,
                KeyAction::ToggleHelp | KeyAction::ClearFocus => self.state.help_visible = false,
                _ => {}
            }
            return false;
        }

        self.state.status = None;
        match action {
            KeyAction::Quit => return true,
            KeyAction::ToggleHelp => self.state.toggle_help(),
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => {
                self.state = handle_scroll_action(self.state.clone(), action);
            }
            KeyAction::NextLink | KeyAction::PrevLink | KeyAction::ClearFocus => {
                self.state = handle_link_action(self.state.clone(), action);
            }
            KeyAction::OpenLink => {
                if let Some(link) = self.state.focused_link() {
                    self.open_link(link);
                }
            }
        }
        false
    }

    /// Handle a mouse event: wheel scrolls, left click opens a link.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.state.help_visible {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                let offset = self.state.scroll_offset().saturating_sub(MOUSE_SCROLL_ROWS);
                self.state.set_scroll_offset(offset);
            }
            MouseEventKind::ScrollDown => {
                let offset = self.state.scroll_offset().saturating_add(MOUSE_SCROLL_ROWS);
                self.state.set_scroll_offset(offset);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(link) = link_at(&self.state, mouse.column, mouse.row) {
                    let index = self.state.links().iter().position(|l| *l == link);
                    self.state.set_focused_index(index);
                    self.open_link(link);
                }
            }
            _ => {}
        }
    }

    /// Terminal resized. The next draw re-resolves the layout for the new
    /// width and clamps the scroll offset to the new document height.
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "Handling resize");
    }

    fn open_link(&mut self, link: LinkRef) {
        let Some(uri) = self.state.portfolio().uri(link).map(str::to_owned) else {
            return;
        };
        self.state.status = Some(match self.opener.open(&uri) {
            Ok(()) => StatusMessage::Opened(uri),
            Err(err) => {
                warn!(error = %err, "Failed to open link");
                StatusMessage::Failed(err.to_string())
            }
        });
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let Self {
            terminal,
            state,
            view,
            ..
        } = self;
        terminal.draw(|frame| render_frame(frame, state, view))?;
        Ok(())
    }
}

/// Paint one frame: the visible slice of the document, the status bar and,
/// when open, the help overlay.
///
/// Records the fresh document geometry in `state`, so scroll clamping and
/// mouse hit tests always match what is on screen.
pub fn render_frame(frame: &mut Frame, state: &mut AppState, view: &ViewConfig) {
    let area = frame.area();
    let status_height = STATUS_BAR_HEIGHT.min(area.height);
    let content = Rect {
        height: area.height - status_height,
        ..area
    };
    let status_area = Rect {
        y: content.bottom(),
        height: status_height,
        ..area
    };

    let document = render_document(
        state.portfolio(),
        area.width,
        &view.layout,
        view.metrics,
        &view.theme,
        state.focused_link(),
    );
    let document_height = document.height();
    state.set_document_metrics(document_height, content.height, document.link_regions);

    copy_window(&document.buffer, state.scroll_offset(), content, frame.buffer_mut());
    status_bar::render_status_bar(frame, status_area, state, &view.theme);

    if state.help_visible {
        render_help_overlay(frame, &view.theme);
    }
}

/// Copy rows `offset..` of `document` into `target`.
fn copy_window(document: &Buffer, offset: u16, target: Rect, frame: &mut Buffer) {
    let target = target.intersection(frame.area);
    let width = target.width.min(document.area.width);
    for row in 0..target.height {
        let source_y = offset.saturating_add(row);
        if source_y >= document.area.bottom() {
            break;
        }
        for column in 0..width {
            frame[(target.x + column, target.y + row)] = document[(column, source_y)].clone();
        }
    }
}

/// Render the first frame at `columns` x `rows` as plain text.
///
/// Same pipeline as the interactive screen, on an in-memory backend.
pub fn dump(
    portfolio: Portfolio,
    columns: u16,
    rows: u16,
    view: &ViewConfig,
) -> Result<String, TuiError> {
    let mut terminal = Terminal::new(TestBackend::new(columns, rows))?;
    let mut state = AppState::new(portfolio);
    terminal.draw(|frame| render_frame(frame, &mut state, view))?;
    info!(columns, rows, document_rows = state.document_height(), "Dumped frame");
    Ok(paint::buffer_lines(terminal.backend().buffer()).join("\n"))
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_portfolio(
    portfolio: Portfolio,
    view: ViewConfig,
    opener: Box<dyn UriOpener>,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(portfolio, view, opener)?;
    let result = app.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
