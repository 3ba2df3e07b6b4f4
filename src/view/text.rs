//! Plain-text shaping: wrapping, letter spacing and heading tiers.
//!
//! Widths are display widths (`unicode-width`), not byte or char counts.

use super::constants::{LARGE_TEXT_SIZE, MEDIUM_TEXT_SIZE};
use unicode_width::UnicodeWidthStr;

/// Display width of `text` in cells, saturating at `u16::MAX`.
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Greedy word wrap to `width` cells.
///
/// Words wider than `width` are placed on their own line and left for the
/// renderer to clip. Always returns at least one line.
pub fn wrap_words(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// `"Get In"` becomes `"G E T   I N"`.
pub fn letter_spaced(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .flat_map(char::to_uppercase)
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("   ")
}

/// Render a heading of font `size` as terminal text within `max_width`.
///
/// Large sizes are letter-spaced, medium sizes upper-cased, small sizes
/// kept as written. A style that does not fit falls back to the next one.
pub fn heading_text(text: &str, size: f64, max_width: u16) -> String {
    if size >= LARGE_TEXT_SIZE {
        let spaced = letter_spaced(text);
        if display_width(&spaced) <= max_width {
            return spaced;
        }
    }
    if size >= MEDIUM_TEXT_SIZE {
        return text.to_uppercase();
    }
    text.to_string()
}

/// Left offset that centers `text_width` cells within `width` cells.
pub fn centered_offset(text_width: u16, width: u16) -> u16 {
    width.saturating_sub(text_width) / 2
}
