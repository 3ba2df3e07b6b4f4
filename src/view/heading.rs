//! Section title and subtitle shared by the grid sections.

use super::constants::SUBTITLE_MAX_WIDTH;
use super::metrics::CellMetrics;
use super::paint::put_aligned;
use super::text::{heading_text, wrap_words};
use crate::layout::ContentAlignment;
use crate::model::SectionHeading;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

/// Measured title and subtitle.
pub struct HeadingPlan {
    title: String,
    subtitle: Vec<String>,
}

impl HeadingPlan {
    pub fn new(heading: &SectionHeading, size: f64, width: u16, metrics: CellMetrics) -> Self {
        let subtitle_width = width.min(metrics.columns(SUBTITLE_MAX_WIDTH));
        let subtitle = if heading.subtitle.trim().is_empty() {
            Vec::new()
        } else {
            wrap_words(&heading.subtitle, subtitle_width)
        };
        Self {
            title: heading_text(&heading.title, size, width),
            subtitle,
        }
    }

    /// Title, a blank row, then the subtitle lines.
    pub fn height(&self) -> u16 {
        2u16.saturating_add(self.subtitle.len() as u16)
    }

    /// Paint centered in `area` starting at `area.y`.
    pub fn paint(&self, area: Rect, buf: &mut Buffer, title: Style, subtitle: Style) {
        put_aligned(buf, area, area.y, &self.title, title, ContentAlignment::Center);
        for (row, line) in self.subtitle.iter().enumerate() {
            let y = area.y.saturating_add(2).saturating_add(row as u16);
            put_aligned(buf, area, y, line, subtitle, ContentAlignment::Center);
        }
    }
}
