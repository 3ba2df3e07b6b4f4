//! Skills grid: one card per skill group.

use super::constants::SECTION_PADDING_ROWS;
use super::document::SectionContext;
use super::grid::{place_cards, GridPlacement};
use super::heading::HeadingPlan;
use super::paint::{fill, put_text, render_block};
use super::text::display_width;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders},
};

const ICON: &str = " ◆ ";
const BULLET: &str = "• ";

/// Border, title, blank row, items, border.
fn card_height(items: usize) -> u16 {
    4u16.saturating_add(items.min(usize::from(u16::MAX)) as u16)
}

/// Measured skills section, ready to paint.
pub struct SkillsPlan {
    heading: HeadingPlan,
    grid: GridPlacement,
}

impl SkillsPlan {
    pub fn new(ctx: &SectionContext<'_>) -> Self {
        let decision = &ctx.screen.skills;
        let width = ctx.inner_width();
        let heights: Vec<u16> = ctx
            .portfolio
            .skills
            .iter()
            .map(|group| card_height(group.items.len()))
            .collect();

        Self {
            heading: HeadingPlan::new(
                &ctx.portfolio.skills_heading,
                decision.heading_size,
                width,
                ctx.metrics,
            ),
            grid: place_cards(width, decision, ctx.layout.skills.gap, ctx.metrics, &heights),
        }
    }

    pub fn height(&self) -> u16 {
        (2 * SECTION_PADDING_ROWS + 1)
            .saturating_add(self.heading.height())
            .saturating_add(self.grid.height)
    }

    pub fn paint(&self, ctx: &SectionContext<'_>, area: Rect, buf: &mut Buffer) {
        let theme = ctx.theme;
        fill(buf, area, Style::default().bg(theme.skills_bg));

        let content = ctx.content_area(area);
        let heading_area = Rect {
            y: area.y + SECTION_PADDING_ROWS,
            ..content
        };
        self.heading.paint(
            heading_area,
            buf,
            Style::default()
                .fg(theme.skills_heading)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(theme.skills_subtitle),
        );

        let grid_y = heading_area.y + self.heading.height() + 1;
        for (group, card) in ctx.portfolio.skills.iter().zip(&self.grid.cards) {
            let rect = Rect::new(
                content.x.saturating_add(card.x),
                grid_y.saturating_add(card.y),
                card.width,
                card.height,
            );
            fill(buf, rect, Style::default().bg(theme.skill_card_bg));
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.skill_card_border));
            let inner = render_block(buf, rect, block);
            if inner.is_empty() {
                continue;
            }

            let icon_style = Style::default()
                .fg(theme.skill_card_title)
                .bg(theme.skill_icon);
            put_text(buf, inner.x, inner.y, inner.width, ICON, icon_style);
            let title_x = inner.x + display_width(ICON) + 1;
            put_text(
                buf,
                title_x,
                inner.y,
                inner.right().saturating_sub(title_x),
                &group.category,
                Style::default()
                    .fg(theme.skill_card_title)
                    .add_modifier(Modifier::BOLD),
            );

            for (row, item) in group.items.iter().enumerate() {
                let y = inner.y.saturating_add(2).saturating_add(row as u16);
                if y >= inner.bottom() {
                    break;
                }
                put_text(buf, inner.x, y, inner.width, BULLET, Style::default().fg(theme.skill_dot));
                let item_x = inner.x + display_width(BULLET);
                put_text(
                    buf,
                    item_x,
                    y,
                    inner.right().saturating_sub(item_x),
                    item,
                    Style::default().fg(theme.skill_item),
                );
            }
        }
    }
}
