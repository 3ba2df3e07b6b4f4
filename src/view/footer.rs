//! Footer: copyright and availability, centered or start-aligned.

use super::constants::{FOOTER_MAX_WIDTH, FOOTER_PADDING_ROWS};
use super::document::SectionContext;
use super::paint::{fill, put_aligned, put_text};
use super::text::display_width;
use crate::layout::ContentAlignment;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

const STATUS_DOT: &str = "● ";

/// Rows painted by the footer.
pub fn footer_height() -> u16 {
    2 * FOOTER_PADDING_ROWS + 3
}

pub fn paint_footer(ctx: &SectionContext<'_>, area: Rect, buf: &mut Buffer) {
    let theme = ctx.theme;
    let footer = &ctx.portfolio.footer;
    let alignment = ctx.screen.footer.alignment;
    fill(buf, area, Style::default().bg(theme.footer_bg));

    let content = ctx.content_area(area);
    let max_width = ctx.metrics.columns(FOOTER_MAX_WIDTH);
    let content = Rect {
        x: content.x + content.width.saturating_sub(max_width) / 2,
        width: content.width.min(max_width),
        ..content
    };
    let y = area.y + FOOTER_PADDING_ROWS;
    put_aligned(
        buf,
        content,
        y,
        &footer.copyright,
        Style::default().fg(theme.footer_text),
        alignment,
    );

    // Dot and availability text move together.
    let status_y = y + 2;
    let status_width = display_width(STATUS_DOT).saturating_add(display_width(&footer.availability));
    let x = match alignment {
        ContentAlignment::Center => content.x + content.width.saturating_sub(status_width) / 2,
        ContentAlignment::Start => content.x,
    };
    let dot_width = display_width(STATUS_DOT);
    put_text(
        buf,
        x,
        status_y,
        content.right().saturating_sub(x),
        STATUS_DOT,
        Style::default().fg(theme.footer_dot),
    );
    let text_x = x.saturating_add(dot_width);
    put_text(
        buf,
        text_x,
        status_y,
        content.right().saturating_sub(text_x),
        &footer.availability,
        Style::default().fg(theme.footer_status),
    );
}
