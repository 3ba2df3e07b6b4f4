//! The whole portfolio painted off-screen at the terminal's width.
//!
//! The document is taller than the terminal. Sections are measured first,
//! then painted top to bottom into one [`Buffer`]; the frame shows a
//! window of it at the current scroll offset.

use super::constants::SECTION_PADDING;
use super::contacts::ContactsPlan;
use super::footer::{footer_height, paint_footer};
use super::hero::HeroPlan;
use super::metrics::CellMetrics;
use super::paint;
use super::skills::SkillsPlan;
use super::styles::Theme;
use crate::layout::{resolve_footer, resolve_hero, resolve_section, LayoutConfig, ScreenLayout};
use crate::model::{LinkRef, Portfolio};
use crate::state::LinkRegion;
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::debug;

/// Everything a section needs to measure and paint itself.
pub struct SectionContext<'a> {
    pub portfolio: &'a Portfolio,
    pub layout: &'a LayoutConfig,
    pub screen: &'a ScreenLayout,
    pub metrics: CellMetrics,
    pub theme: &'a Theme,
    pub focused: Option<LinkRef>,
    pub columns: u16,
}

impl SectionContext<'_> {
    fn padding_columns(&self) -> u16 {
        self.metrics.columns(SECTION_PADDING)
    }

    /// Columns left after the horizontal section padding.
    pub fn inner_width(&self) -> u16 {
        self.columns.saturating_sub(2 * self.padding_columns())
    }

    /// `area` minus the horizontal section padding.
    pub fn content_area(&self, area: Rect) -> Rect {
        let pad = self.padding_columns().min(area.width);
        Rect::new(
            area.x + pad,
            area.y,
            area.width.saturating_sub(2 * pad),
            area.height,
        )
    }
}

/// Layout decisions for a terminal `columns` wide.
///
/// The hero sees the full width. The grids and the footer sit inside the
/// section padding and see what is left of it.
pub fn resolve_document_layout(
    columns: u16,
    config: &LayoutConfig,
    metrics: CellMetrics,
) -> ScreenLayout {
    let width = metrics.viewport_width(columns).get();
    let inner = (width - 2.0 * SECTION_PADDING).max(0.0);
    ScreenLayout {
        width,
        hero: resolve_hero(width, &config.hero),
        skills: resolve_section(inner, &config.skills),
        contacts: resolve_section(inner, &config.contacts),
        footer: resolve_footer(inner, config.footer_compact_threshold),
    }
}

/// A painted document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Every row of the portfolio, `columns` wide.
    pub buffer: Buffer,
    /// Clickable areas in document coordinates.
    pub link_regions: Vec<LinkRegion>,
    /// Decisions the document was painted with.
    pub screen: ScreenLayout,
}

impl Document {
    /// Rows in the document.
    pub fn height(&self) -> u16 {
        self.buffer.area.height
    }

    /// Plain text of every row, trailing blanks trimmed.
    pub fn to_lines(&self) -> Vec<String> {
        paint::buffer_lines(&self.buffer)
    }
}

/// Paint the whole portfolio at `columns` wide.
pub fn render_document(
    portfolio: &Portfolio,
    columns: u16,
    layout: &LayoutConfig,
    metrics: CellMetrics,
    theme: &Theme,
    focused: Option<LinkRef>,
) -> Document {
    let screen = resolve_document_layout(columns, layout, metrics);
    let ctx = SectionContext {
        portfolio,
        layout,
        screen: &screen,
        metrics,
        theme,
        focused,
        columns,
    };

    let hero = HeroPlan::new(&ctx);
    let skills = SkillsPlan::new(&ctx);
    let contacts = ContactsPlan::new(&ctx);
    let heights = [hero.height(), skills.height(), contacts.height(), footer_height()];
    let total = heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h));

    debug!(
        columns,
        rows = total,
        skills_columns = screen.skills.column_count,
        contacts_columns = screen.contacts.column_count,
        "Laid out document"
    );

    let mut buffer = Buffer::empty(Rect::new(0, 0, columns, total));
    let mut link_regions = Vec::new();
    let mut y: u16 = 0;
    let mut next_area = |height: u16| {
        let area = Rect::new(0, y, columns, height);
        y = y.saturating_add(height);
        area
    };

    let hero_area = next_area(heights[0]);
    let skills_area = next_area(heights[1]);
    let contacts_area = next_area(heights[2]);
    let footer_area = next_area(heights[3]);

    hero.paint(&ctx, hero_area, &mut buffer, &mut link_regions);
    skills.paint(&ctx, skills_area, &mut buffer);
    contacts.paint(&ctx, contacts_area, &mut buffer, &mut link_regions);
    paint_footer(&ctx, footer_area, &mut buffer);

    Document {
        buffer,
        link_regions,
        screen,
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
