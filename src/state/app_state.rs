//! Application state.
//!
//! The portfolio itself never changes. What changes is where the user is
//! looking (scroll offset), which link has focus, and whether the help
//! overlay is open. Document geometry comes from the last render pass.

use crate::model::{LinkRef, Portfolio};
use ratatui::layout::Rect;

/// A clickable area of the rendered document.
///
/// `area` is in document coordinates: row 0 is the top of the hero, not
/// the top of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRegion {
    pub link: LinkRef,
    pub area: Rect,
}

/// One-line feedback shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// A link was handed to the platform opener.
    Opened(String),
    /// Opening a link failed.
    Failed(String),
}

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    portfolio: Portfolio,
    links: Vec<LinkRef>,

    /// First document row visible in the viewport.
    scroll_offset: u16,
    /// Rows the viewport shows.
    viewport_height: u16,
    /// Rows of the full document at the current width.
    document_height: u16,
    /// Clickable areas from the last render.
    link_regions: Vec<LinkRegion>,

    /// Index into `links` of the focused link.
    focused: Option<usize>,

    /// Whether the key help overlay is shown.
    pub help_visible: bool,
    /// Feedback from the last link action.
    pub status: Option<StatusMessage>,
}

impl AppState {
    /// Fresh state for `portfolio`, scrolled to the top with nothing focused.
    pub fn new(portfolio: Portfolio) -> Self {
        let links = portfolio.links();
        Self {
            portfolio,
            links,
            scroll_offset: 0,
            viewport_height: 0,
            document_height: 0,
            link_regions: Vec::new(),
            focused: None,
            help_visible: false,
            status: None,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Every focusable link in screen order.
    pub fn links(&self) -> &[LinkRef] {
        &self.links
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn document_height(&self) -> u16 {
        self.document_height
    }

    pub fn link_regions(&self) -> &[LinkRegion] {
        &self.link_regions
    }

    /// Largest offset that still fills the viewport.
    pub fn max_scroll_offset(&self) -> u16 {
        self.document_height.saturating_sub(self.viewport_height)
    }

    /// Set the scroll offset, clamped to the document.
    pub fn set_scroll_offset(&mut self, offset: u16) {
        self.scroll_offset = offset.min(self.max_scroll_offset());
    }

    /// The focused link, if any.
    pub fn focused_link(&self) -> Option<LinkRef> {
        self.focused.and_then(|i| self.links.get(i).copied())
    }

    /// Index of the focused link within [`AppState::links`].
    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    /// Focus the link at `index`, or clear focus with `None`.
    ///
    /// Out of range indices clear focus.
    pub fn set_focused_index(&mut self, index: Option<usize>) {
        self.focused = index.filter(|i| *i < self.links.len());
    }

    /// URI behind the focused link.
    pub fn focused_uri(&self) -> Option<&str> {
        self.focused_link().and_then(|link| self.portfolio.uri(link))
    }

    /// Record the geometry of a fresh render pass.
    ///
    /// Called after every layout, including resizes. Keeps the offset valid
    /// for the new document height.
    pub fn set_document_metrics(
        &mut self,
        document_height: u16,
        viewport_height: u16,
        link_regions: Vec<LinkRegion>,
    ) {
        self.document_height = document_height;
        self.viewport_height = viewport_height;
        self.link_regions = link_regions;
        self.set_scroll_offset(self.scroll_offset);
    }

    /// Region of `link` in the last render, if it was painted.
    pub fn region_of(&self, link: LinkRef) -> Option<Rect> {
        self.link_regions
            .iter()
            .find(|region| region.link == link)
            .map(|region| region.area)
    }

    /// Scroll the minimum amount needed to show `area` fully (or its top,
    /// if it is taller than the viewport).
    pub fn scroll_into_view(&mut self, area: Rect) {
        let top = area.y;
        let bottom = area.y.saturating_add(area.height);
        let view_bottom = self.scroll_offset.saturating_add(self.viewport_height);

        if top < self.scroll_offset || area.height > self.viewport_height {
            self.set_scroll_offset(top);
        } else if bottom > view_bottom {
            self.set_scroll_offset(bottom - self.viewport_height);
        }
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
