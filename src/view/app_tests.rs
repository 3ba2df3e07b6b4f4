//! Tests for the TUI event handling and frame rendering.

use super::*;
use crate::links::{OpenError, RecordingOpener};
use crate::model::LinkKind;
use crossterm::event::{KeyEventState, MouseEvent};
use ratatui::backend::TestBackend;
use std::rc::Rc;

struct FailingOpener;

impl UriOpener for FailingOpener {
    fn open(&self, _uri: &str) -> Result<(), OpenError> {
        Err(OpenError::Unsupported)
    }
}

fn app_with(width: u16, height: u16, opener: Box<dyn UriOpener>) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut app = TuiApp::with_terminal(
        terminal,
        Portfolio::default(),
        ViewConfig::default(),
        opener,
    );
    app.draw().unwrap();
    app
}

fn app(width: u16, height: u16) -> (TuiApp<TestBackend>, Rc<RecordingOpener>) {
    let recorder = Rc::new(RecordingOpener::new());
    let app = app_with(width, height, Box::new(Rc::clone(&recorder)));
    (app, recorder)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) -> bool {
    let quit = app.handle_key(key(code));
    app.draw().unwrap();
    quit
}

fn click(app: &mut TuiApp<TestBackend>, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
    app.draw().unwrap();
}

fn screen(app: &TuiApp<TestBackend>) -> String {
    paint::buffer_lines(app.terminal().backend().buffer()).join("\n")
}

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

#[test]
fn q_and_ctrl_c_quit() {
    let (mut app, _) = app(80, 24);
    assert!(app.handle_key(key(KeyCode::Char('q'))));
    assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
}

#[test]
fn unbound_key_is_ignored() {
    let (mut app, _) = app(80, 24);
    assert!(!press(&mut app, KeyCode::Char('z')));
    assert_eq!(app.state().scroll_offset(), 0);
}

#[test]
fn key_release_is_ignored() {
    let (mut app, _) = app(80, 24);
    let release = KeyEvent {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert!(!app.handle_key(release));
}

#[test]
fn first_frame_shows_hero_and_status_bar() {
    let (app, _) = app(100, 30);
    let screen = screen(&app);
    assert!(screen.contains("D E N Y S   Z V I E R I E V"));
    assert!(screen.contains("Tab: links"));
    assert!(screen.contains("Top"));
}

#[test]
fn draw_records_document_geometry() {
    let (app, _) = app(100, 30);
    assert_eq!(app.state().viewport_height(), 29);
    assert!(app.state().document_height() > 29);
    assert_eq!(app.state().link_regions().len(), 10);
}

#[test]
fn scroll_keys_move_the_window() {
    let (mut app, _) = app(100, 30);
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.state().scroll_offset(), 1);
    press(&mut app, KeyCode::End);
    assert_eq!(app.state().scroll_offset(), app.state().max_scroll_offset());
    assert!(screen(&app).contains("Available for new opportunities"));
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.state().scroll_offset(), 0);
}

#[test]
fn tab_focuses_and_enter_opens() {
    let (mut app, recorder) = app(100, 30);
    press(&mut app, KeyCode::Tab);
    assert_eq!(
        app.state().focused_link(),
        Some(LinkRef {
            kind: LinkKind::Action,
            index: 0
        })
    );
    assert!(screen(&app).contains("Email Me → mailto:dzdenya@gmail.com"));

    press(&mut app, KeyCode::Enter);
    assert_eq!(recorder.opened(), vec!["mailto:dzdenya@gmail.com"]);
    assert!(screen(&app).contains("Opened mailto:dzdenya@gmail.com"));
}

#[test]
fn back_tab_focuses_last_contact_and_scrolls_to_it() {
    let (mut app, _) = app(100, 30);
    app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
    app.draw().unwrap();

    let focused = app.state().focused_link().unwrap();
    assert_eq!(focused.kind, LinkKind::Contact);
    assert_eq!(focused.index, 4);

    let area = app.state().region_of(focused).unwrap();
    let offset = app.state().scroll_offset();
    assert!(area.y >= offset);
    assert!(area.bottom() <= offset + app.state().viewport_height());
}

#[test]
fn enter_without_focus_opens_nothing() {
    let (mut app, recorder) = app(100, 30);
    press(&mut app, KeyCode::Enter);
    assert!(recorder.opened().is_empty());
    assert_eq!(app.state().status, None);
}

#[test]
fn clicking_a_button_opens_its_uri() {
    let (mut app, recorder) = app(100, 30);
    let region = app.state().link_regions()[1];
    click(&mut app, region.area.x + 1, region.area.y + 1);
    assert_eq!(recorder.opened(), vec!["tel:+34661455825"]);
    assert_eq!(app.state().focused_link(), Some(region.link));
}

#[test]
fn click_uses_scroll_offset() {
    let (mut app, recorder) = app(100, 30);
    press(&mut app, KeyCode::End);
    let contact = *app
        .state()
        .link_regions()
        .iter()
        .find(|r| r.link.kind == LinkKind::Contact && r.link.index == 4)
        .unwrap();
    let row = contact.area.y + 1 - app.state().scroll_offset();
    click(&mut app, contact.area.x + 1, row);
    assert_eq!(
        recorder.opened(),
        vec!["https://www.linkedin.com/in/denys-zvieriev"]
    );
}

#[test]
fn click_on_empty_space_does_nothing() {
    let (mut app, recorder) = app(100, 30);
    click(&mut app, 0, 0);
    assert!(recorder.opened().is_empty());
    assert_eq!(app.state().focused_link(), None);
}

#[test]
fn failed_open_is_reported_not_fatal() {
    let mut app = app_with(100, 30, Box::new(FailingOpener));
    press(&mut app, KeyCode::Tab);
    assert!(!press(&mut app, KeyCode::Enter));
    assert!(matches!(app.state().status, Some(StatusMessage::Failed(_))));
    assert!(screen(&app).contains("Could not open link"));
}

#[test]
fn help_overlay_blocks_other_keys() {
    let (mut app, _) = app(100, 30);
    press(&mut app, KeyCode::Char('?'));
    assert!(app.state().help_visible);
    assert!(screen(&app).contains("Keyboard Shortcuts"));

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.state().scroll_offset(), 0);

    press(&mut app, KeyCode::Esc);
    assert!(!app.state().help_visible);
    assert!(!screen(&app).contains("Keyboard Shortcuts"));
}

#[test]
fn mouse_wheel_scrolls_three_rows() {
    let (mut app, _) = app(100, 30);
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.state().scroll_offset(), MOUSE_SCROLL_ROWS);
}

#[test]
fn resize_relayouts_and_clamps_scroll() {
    let (mut app, _) = app(60, 20);
    press(&mut app, KeyCode::End);
    let narrow_offset = app.state().scroll_offset();

    app.terminal.backend_mut().resize(200, 20);
    app.handle_resize(200, 20);
    app.draw().unwrap();

    assert!(app.state().scroll_offset() <= app.state().max_scroll_offset());
    assert!(app.state().max_scroll_offset() < narrow_offset);
}

#[test]
fn tiny_terminal_draws_without_panicking() {
    for (width, height) in [(1, 1), (5, 2), (20, 3)] {
        let (mut app, _) = app(width, height);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::PageDown);
    }
}

#[test]
fn dump_matches_first_frame() {
    let text = dump(Portfolio::default(), 100, 30, &ViewConfig::default()).unwrap();
    let (app, _) = app(100, 30);
    assert_eq!(text, screen(&app));
    assert_eq!(text.lines().count(), 30);
}

#[test]
fn copy_window_copies_from_offset() {
    let mut document = Buffer::empty(Rect::new(0, 0, 3, 4));
    for (y, symbol) in ["a", "b", "c", "d"].iter().enumerate() {
        document[(0, y as u16)].set_symbol(symbol);
    }
    let mut frame = Buffer::empty(Rect::new(0, 0, 3, 3));
    copy_window(&document, 2, Rect::new(0, 0, 3, 3), &mut frame);
    assert_eq!(frame[(0, 0)].symbol(), "c");
    assert_eq!(frame[(0, 1)].symbol(), "d");
    assert_eq!(frame[(0, 2)].symbol(), " ");
}
