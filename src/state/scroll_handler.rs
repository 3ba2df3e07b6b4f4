//! Vertical scrolling keyboard action handler.

use crate::model::KeyAction;
use crate::state::AppState;

/// Apply a scroll action and return the new state.
///
/// Page actions move by one viewport height minus one row of overlap, so
/// the last line of the old page stays visible. Non-scroll actions leave
/// the state unchanged.
pub fn handle_scroll_action(mut state: AppState, action: KeyAction) -> AppState {
    let offset = state.scroll_offset();
    let page = state.viewport_height().saturating_sub(1).max(1);

    let target = match action {
        KeyAction::ScrollUp => offset.saturating_sub(1),
        KeyAction::ScrollDown => offset.saturating_add(1),
        KeyAction::PageUp => offset.saturating_sub(page),
        KeyAction::PageDown => offset.saturating_add(page),
        KeyAction::ScrollToTop => 0,
        KeyAction::ScrollToBottom => state.max_scroll_offset(),
        _ => return state,
    };

    state.set_scroll_offset(target);
    state
}
