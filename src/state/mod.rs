//! UI state machine (pure).
//!
//! All state transitions are plain functions over [`AppState`], testable
//! without a terminal.

pub mod app_state;
pub mod link_handler;
pub mod scroll_handler;

pub use app_state::{AppState, LinkRegion, StatusMessage};
pub use link_handler::{handle_link_action, link_at};
pub use scroll_handler::handle_scroll_action;
