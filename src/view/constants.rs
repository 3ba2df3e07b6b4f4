//! Layout dimension constants for terminal rendering.
//!
//! Logical sizes are converted to cells through [`super::CellMetrics`];
//! values here already in cells are marked as such.

/// Horizontal padding around every section except the hero, in logical units.
pub const SECTION_PADDING: f64 = 20.0;

/// Vertical padding of the hero, skills and contacts sections, in rows.
pub const SECTION_PADDING_ROWS: u16 = 2;

/// Vertical padding of the footer, in rows.
pub const FOOTER_PADDING_ROWS: u16 = 1;

/// Widest the hero summary paragraph gets, in logical units.
pub const HERO_TEXT_MAX_WIDTH: f64 = 900.0;

/// Widest a section subtitle gets, in logical units.
pub const SUBTITLE_MAX_WIDTH: f64 = 760.0;

/// Widest the footer's content column gets, in logical units.
pub const FOOTER_MAX_WIDTH: f64 = 1120.0;

/// Horizontal gap between hero action buttons, in logical units.
pub const BUTTON_GAP: f64 = 12.0;

/// Padding inside an action button, in cells on each side.
pub const BUTTON_PADDING_COLS: u16 = 2;

/// Height of a bordered action button or role pill, in rows.
pub const BUTTON_HEIGHT: u16 = 3;

/// Narrowest a card is drawn, in cells. Keeps borders and one glyph visible.
pub const MIN_CARD_COLUMNS: u16 = 4;

/// Height of a contact card (border, padding, badge, label, value), in rows.
pub const CONTACT_CARD_HEIGHT: u16 = 7;

/// Headings at or above this font size are letter-spaced.
pub const LARGE_TEXT_SIZE: f64 = 60.0;

/// Headings at or above this font size are upper-cased.
pub const MEDIUM_TEXT_SIZE: f64 = 40.0;

/// Rows moved per mouse wheel notch.
pub const MOUSE_SCROLL_ROWS: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for the help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for the help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;
