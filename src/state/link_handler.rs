//! Link focus and hit testing.

use crate::model::{KeyAction, LinkRef};
use crate::state::AppState;

/// Apply a link focus action and return the new state.
///
/// `NextLink`/`PrevLink` wrap around and scroll the newly focused link into
/// view. With nothing focused, `NextLink` starts at the first link and
/// `PrevLink` at the last. `ClearFocus` drops focus. Opening is left to the
/// caller, which owns the URI opener.
pub fn handle_link_action(mut state: AppState, action: KeyAction) -> AppState {
    let count = state.links().len();
    if count == 0 {
        state.set_focused_index(None);
        return state;
    }

    let next = match (action, state.focused_index()) {
        (KeyAction::NextLink, Some(i)) => Some((i + 1) % count),
        (KeyAction::NextLink, None) => Some(0),
        (KeyAction::PrevLink, Some(i)) => Some((i + count - 1) % count),
        (KeyAction::PrevLink, None) => Some(count - 1),
        (KeyAction::ClearFocus, _) => None,
        _ => return state,
    };

    state.set_focused_index(next);
    if let Some(area) = state.focused_link().and_then(|link| state.region_of(link)) {
        state.scroll_into_view(area);
    }
    state
}

/// Link under a terminal cell, given the current scroll offset.
///
/// `column` and `row` are viewport coordinates as reported by mouse events.
pub fn link_at(state: &AppState, column: u16, row: u16) -> Option<LinkRef> {
    if row >= state.viewport_height() {
        return None;
    }
    let document_row = row.saturating_add(state.scroll_offset());
    state
        .link_regions()
        .iter()
        .find(|region| {
            let area = region.area;
            column >= area.x
                && column < area.x.saturating_add(area.width)
                && document_row >= area.y
                && document_row < area.y.saturating_add(area.height)
        })
        .map(|region| region.link)
}
