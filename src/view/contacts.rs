//! Contacts grid: one clickable card per contact channel.

use super::constants::{CONTACT_CARD_HEIGHT, SECTION_PADDING_ROWS};
use super::document::SectionContext;
use super::grid::{place_cards, GridPlacement};
use super::heading::HeadingPlan;
use super::paint::{fill, put_aligned, render_block};
use crate::layout::ContentAlignment;
use crate::model::{LinkKind, LinkRef};
use crate::state::LinkRegion;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders},
};

/// Measured contacts section, ready to paint.
pub struct ContactsPlan {
    heading: HeadingPlan,
    grid: GridPlacement,
}

impl ContactsPlan {
    pub fn new(ctx: &SectionContext<'_>) -> Self {
        let decision = &ctx.screen.contacts;
        let width = ctx.inner_width();
        let heights = vec![CONTACT_CARD_HEIGHT; ctx.portfolio.contacts.len()];

        Self {
            heading: HeadingPlan::new(
                &ctx.portfolio.contacts_heading,
                decision.heading_size,
                width,
                ctx.metrics,
            ),
            grid: place_cards(width, decision, ctx.layout.contacts.gap, ctx.metrics, &heights),
        }
    }

    pub fn height(&self) -> u16 {
        (2 * SECTION_PADDING_ROWS + 1)
            .saturating_add(self.heading.height())
            .saturating_add(self.grid.height)
    }

    pub fn paint(
        &self,
        ctx: &SectionContext<'_>,
        area: Rect,
        buf: &mut Buffer,
        regions: &mut Vec<LinkRegion>,
    ) {
        let theme = ctx.theme;
        fill(buf, area, Style::default().bg(theme.contacts_bg));

        let content = ctx.content_area(area);
        let heading_area = Rect {
            y: area.y + SECTION_PADDING_ROWS,
            ..content
        };
        self.heading.paint(
            heading_area,
            buf,
            Style::default()
                .fg(theme.contacts_heading)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(theme.contacts_subtitle),
        );

        let grid_y = heading_area.y + self.heading.height() + 1;
        let cards = ctx.portfolio.contacts.iter().zip(&self.grid.cards);
        for (index, (contact, card)) in cards.enumerate() {
            let link = LinkRef {
                kind: LinkKind::Contact,
                index,
            };
            let focused = ctx.focused == Some(link);
            let rect = Rect::new(
                content.x.saturating_add(card.x),
                grid_y.saturating_add(card.y),
                card.width,
                card.height,
            );

            fill(buf, rect, Style::default().bg(theme.contact_card_bg));
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.link_border(theme.contact_card_border, focused));
            let inner = render_block(buf, rect, block);
            if inner.is_empty() {
                continue;
            }

            // Padding row, badge, label, value, padding row.
            let badge = format!(" {} ", contact.icon);
            let rows = [
                (
                    badge.as_str(),
                    Style::default()
                        .fg(theme.contact_badge_fg)
                        .bg(theme.contact_badge_bg)
                        .add_modifier(Modifier::BOLD),
                ),
                (contact.label.as_str(), Style::default().fg(theme.contact_label)),
                (
                    contact.value.as_str(),
                    Style::default()
                        .fg(theme.contact_value)
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            for (row, (text, style)) in rows.iter().enumerate() {
                let y = inner.y.saturating_add(1).saturating_add(row as u16);
                if y >= inner.bottom() {
                    break;
                }
                put_aligned(buf, inner, y, text, *style, ContentAlignment::Center);
            }

            let visible = rect.intersection(buf.area);
            if !visible.is_empty() {
                regions.push(LinkRegion {
                    link,
                    area: visible,
                });
            }
        }
    }
}
