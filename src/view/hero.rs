//! Hero banner: name, role pill, summary, action buttons, scroll hint.

use super::constants::{
    BUTTON_GAP, BUTTON_HEIGHT, BUTTON_PADDING_COLS, HERO_TEXT_MAX_WIDTH, SECTION_PADDING_ROWS,
};
use super::document::SectionContext;
use super::paint::{fill, put_aligned, render_block};
use super::text::{display_width, heading_text, wrap_words};
use crate::layout::{flow_rows, ContentAlignment};
use crate::model::{LinkKind, LinkRef};
use crate::state::LinkRegion;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders},
};

const SCROLL_HINT: &str = "Scroll to explore";

/// Subtitles this large get a bold pill.
const BOLD_SUBTITLE_SIZE: f64 = 24.0;

struct Button {
    link: LinkRef,
    label: String,
    width: u16,
}

/// Measured hero, ready to paint.
pub struct HeroPlan {
    heading: String,
    role: String,
    role_bold: bool,
    summary: Vec<String>,
    button_rows: Vec<Vec<Button>>,
    gap: u16,
}

impl HeroPlan {
    pub fn new(ctx: &SectionContext<'_>) -> Self {
        let hero = &ctx.screen.hero;
        let content = &ctx.portfolio.hero;
        let inner_width = ctx.inner_width();

        let summary_width = inner_width.min(ctx.metrics.columns(HERO_TEXT_MAX_WIDTH));
        let gap = ctx.metrics.columns(BUTTON_GAP).max(1);

        let buttons: Vec<Button> = ctx
            .portfolio
            .action_links
            .iter()
            .enumerate()
            .map(|(index, action)| Button {
                link: LinkRef {
                    kind: LinkKind::Action,
                    index,
                },
                label: action.label.clone(),
                width: display_width(&action.label)
                    .saturating_add(2 * BUTTON_PADDING_COLS + 2),
            })
            .collect();

        Self {
            heading: heading_text(&content.name, hero.heading_size, inner_width),
            role: content.role.clone(),
            role_bold: hero.subtitle_size >= BOLD_SUBTITLE_SIZE,
            summary: wrap_words(&content.summary, summary_width),
            button_rows: wrap_buttons(buttons, hero.actions_per_row, inner_width, gap),
            gap,
        }
    }

    pub fn height(&self) -> u16 {
        let buttons = (self.button_rows.len() as u16).saturating_mul(BUTTON_HEIGHT);
        // padding, heading, blank, pill, blank, summary, blank, buttons, blank, hint, padding
        (2 * SECTION_PADDING_ROWS + 6 + BUTTON_HEIGHT)
            .saturating_add(self.summary.len() as u16)
            .saturating_add(buttons)
    }

    pub fn paint(
        &self,
        ctx: &SectionContext<'_>,
        area: Rect,
        buf: &mut Buffer,
        regions: &mut Vec<LinkRegion>,
    ) {
        let theme = ctx.theme;
        fill(buf, area, Style::default().bg(theme.hero_bg));

        let content = ctx.content_area(area);
        let mut y = area.y + SECTION_PADDING_ROWS;

        let heading_style = Style::default()
            .fg(theme.hero_heading)
            .add_modifier(Modifier::BOLD);
        put_aligned(buf, content, y, &self.heading, heading_style, ContentAlignment::Center);
        y += 2;

        // Role pill
        let pill_width = display_width(&self.role).saturating_add(4).min(content.width);
        let pill = Rect::new(
            content.x + content.width.saturating_sub(pill_width) / 2,
            y,
            pill_width,
            BUTTON_HEIGHT,
        );
        let pill_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.hero_pill_border));
        let inner = render_block(buf, pill, pill_block);
        let mut role_style = Style::default().fg(theme.hero_pill);
        if self.role_bold {
            role_style = role_style.add_modifier(Modifier::BOLD);
        }
        put_aligned(buf, inner, inner.y, &self.role, role_style, ContentAlignment::Center);
        y += BUTTON_HEIGHT + 1;

        let summary_style = Style::default().fg(theme.hero_summary);
        for line in &self.summary {
            put_aligned(buf, content, y, line, summary_style, ContentAlignment::Center);
            y += 1;
        }
        y += 1;

        for row in &self.button_rows {
            let row_width = row_width(row, self.gap);
            let mut x = content.x + content.width.saturating_sub(row_width) / 2;
            for button in row {
                let rect = Rect::new(x, y, button.width, BUTTON_HEIGHT);
                self.paint_button(ctx, button, rect, buf, regions);
                x = x.saturating_add(button.width).saturating_add(self.gap);
            }
            y += BUTTON_HEIGHT;
        }
        y += 1;

        put_aligned(
            buf,
            content,
            y,
            SCROLL_HINT,
            Style::default().fg(theme.scroll_hint),
            ContentAlignment::Center,
        );
    }

    fn paint_button(
        &self,
        ctx: &SectionContext<'_>,
        button: &Button,
        rect: Rect,
        buf: &mut Buffer,
        regions: &mut Vec<LinkRegion>,
    ) {
        let theme = ctx.theme;
        let focused = ctx.focused == Some(button.link);
        // The first action is the primary one.
        let primary = button.link.index == 0;

        if primary {
            fill(buf, rect, Style::default().bg(theme.primary_button_bg));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.link_border(theme.button_border, focused));
        let inner = render_block(buf, rect, block);
        if inner.is_empty() {
            return;
        }
        let mut label_style = Style::default().fg(theme.button_text);
        if primary || focused {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        put_aligned(buf, inner, inner.y, &button.label, label_style, ContentAlignment::Center);

        let visible = rect.intersection(buf.area);
        if !visible.is_empty() {
            regions.push(LinkRegion {
                link: button.link,
                area: visible,
            });
        }
    }
}

fn row_width(row: &[Button], gap: u16) -> u16 {
    let buttons = row.iter().fold(0u16, |acc, b| acc.saturating_add(b.width));
    let gaps = gap.saturating_mul((row.len() as u16).saturating_sub(1));
    buttons.saturating_add(gaps)
}

/// Split buttons into rows of at most `per_row`, wrapping earlier when a
/// row would not fit in `width`.
fn wrap_buttons(buttons: Vec<Button>, per_row: usize, width: u16, gap: u16) -> Vec<Vec<Button>> {
    let mut rows: Vec<Vec<Button>> = Vec::new();
    let chunk_sizes: Vec<usize> = flow_rows(&buttons, per_row.max(1)).map(<[Button]>::len).collect();
    let mut buttons = buttons.into_iter();

    for size in chunk_sizes {
        let mut row: Vec<Button> = Vec::with_capacity(size);
        for button in buttons.by_ref().take(size) {
            let needed = row_width(&row, gap)
                .saturating_add(if row.is_empty() { 0 } else { gap })
                .saturating_add(button.width);
            if !row.is_empty() && needed > width {
                rows.push(std::mem::take(&mut row));
            }
            row.push(button);
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(index: usize, width: u16) -> Button {
        Button {
            link: LinkRef {
                kind: LinkKind::Action,
                index,
            },
            label: String::new(),
            width,
        }
    }

    fn shape(rows: &[Vec<Button>]) -> Vec<usize> {
        rows.iter().map(Vec::len).collect()
    }

    #[test]
    fn wrap_buttons_respects_per_row() {
        let buttons = (0..5).map(|i| button(i, 10)).collect();
        let rows = wrap_buttons(buttons, 2, 200, 1);
        assert_eq!(shape(&rows), vec![2, 2, 1]);
    }

    #[test]
    fn wrap_buttons_wraps_on_width() {
        let buttons = (0..5).map(|i| button(i, 10)).collect();
        // 3 buttons need 10 + 1 + 10 + 1 + 10 = 32 cells.
        let rows = wrap_buttons(buttons, 5, 25, 1);
        assert_eq!(shape(&rows), vec![2, 2, 1]);
    }

    #[test]
    fn wrap_buttons_keeps_oversized_button_alone() {
        let buttons = vec![button(0, 50), button(1, 5)];
        let rows = wrap_buttons(buttons, 5, 20, 1);
        assert_eq!(shape(&rows), vec![1, 1]);
    }

    #[test]
    fn wrap_buttons_keeps_order() {
        let buttons = (0..4).map(|i| button(i, 4)).collect();
        let rows = wrap_buttons(buttons, 3, 100, 1);
        let order: Vec<usize> = rows.iter().flatten().map(|b| b.link.index).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn row_width_counts_gaps() {
        let row = vec![button(0, 10), button(1, 6)];
        assert_eq!(row_width(&row, 2), 18);
        assert_eq!(row_width(&[], 2), 0);
    }
}
