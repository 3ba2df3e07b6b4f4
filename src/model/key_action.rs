//! Domain-level keyboard actions independent of key bindings.

/// User intents that key bindings map onto.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` lives in
/// [`crate::config::KeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the page up one line. Default: k/↑
    ScrollUp,
    /// Scroll the page down one line. Default: j/↓
    ScrollDown,
    /// Scroll up one screen. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down one screen. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the hero banner. Default: g/Home
    ScrollToTop,
    /// Jump to the footer. Default: G/End
    ScrollToBottom,

    // Links
    /// Focus the next link (action button or contact card). Default: Tab
    NextLink,
    /// Focus the previous link. Default: Shift+Tab
    PrevLink,
    /// Open the focused link. Default: Enter/o
    OpenLink,
    /// Drop link focus. Default: Esc
    ClearFocus,

    // Application
    /// Show or hide the key help overlay. Default: ?
    ToggleHelp,
    /// Exit. Default: q/Ctrl+c
    Quit,
}
