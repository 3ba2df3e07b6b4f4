//! Clipped drawing primitives over a [`Buffer`].
//!
//! Cards may overflow the document (minimum card widths win over the
//! terminal width), so every write here is clipped to the buffer.

use super::text::{centered_offset, display_width};
use crate::layout::ContentAlignment;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Widget},
};

/// Plain text of every row of `buffer`, trailing blanks trimmed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

/// Paint `style` (usually a background) over `area`.
pub fn fill(buf: &mut Buffer, area: Rect, style: Style) {
    let area = area.intersection(buf.area);
    if !area.is_empty() {
        buf.set_style(area, style);
    }
}

/// Write `text` at `(x, y)`, at most `max_width` cells wide.
pub fn put_text(buf: &mut Buffer, x: u16, y: u16, max_width: u16, text: &str, style: Style) {
    let bounds = buf.area;
    if y < bounds.top() || y >= bounds.bottom() || x < bounds.left() || x >= bounds.right() {
        return;
    }
    let max_width = max_width.min(bounds.right() - x);
    if max_width == 0 {
        return;
    }
    buf.set_stringn(x, y, text, usize::from(max_width), style);
}

/// Write `text` on row `y` of `area`, aligned horizontally.
pub fn put_aligned(
    buf: &mut Buffer,
    area: Rect,
    y: u16,
    text: &str,
    style: Style,
    alignment: ContentAlignment,
) {
    let x = match alignment {
        ContentAlignment::Center => area.x + centered_offset(display_width(text), area.width),
        ContentAlignment::Start => area.x,
    };
    let used = x - area.x;
    put_text(buf, x, y, area.width.saturating_sub(used), text, style);
}

/// Render `block` into `area`, clipped to the buffer.
///
/// Returns the block's inner area (also clipped), empty if nothing is visible.
pub fn render_block(buf: &mut Buffer, area: Rect, block: Block<'_>) -> Rect {
    let area = area.intersection(buf.area);
    if area.is_empty() {
        return Rect::new(area.x, area.y, 0, 0);
    }
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}
