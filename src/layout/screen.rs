//! Whole-screen layout: hero, both grids and footer for one width.

use super::params::{GridSection, HeroSpec, LayoutConfig};
use super::resolver::{is_compact, resolve_section, LayoutDecision};

/// Horizontal alignment of a block of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentAlignment {
    /// Centered in the available width.
    #[default]
    Center,
    /// Flush with the leading edge.
    Start,
}

impl ContentAlignment {
    /// Compact layouts center their content, wide ones start-align it.
    pub fn for_compact(compact: bool) -> Self {
        if compact {
            Self::Center
        } else {
            Self::Start
        }
    }
}

/// Hero banner layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroLayout {
    /// Below the hero's compact threshold.
    pub is_compact: bool,
    /// Name heading size.
    pub heading_size: f64,
    /// Role pill size.
    pub subtitle_size: f64,
    /// Summary paragraph size.
    pub body_size: f64,
    /// Action buttons per flow row, at least 1.
    pub actions_per_row: usize,
}

/// Footer layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLayout {
    /// Below the footer's compact threshold.
    pub is_compact: bool,
    /// Alignment of the copyright and availability lines.
    pub alignment: ContentAlignment,
}

/// Layout decisions for every section of the screen at one width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    /// Width the decisions were resolved for.
    pub width: f64,
    /// Hero banner.
    pub hero: HeroLayout,
    /// Skills grid.
    pub skills: LayoutDecision,
    /// Contacts grid.
    pub contacts: LayoutDecision,
    /// Footer.
    pub footer: FooterLayout,
}

impl ScreenLayout {
    /// Decision for one grid section.
    pub fn section(&self, section: GridSection) -> &LayoutDecision {
        match section {
            GridSection::Skills => &self.skills,
            GridSection::Contacts => &self.contacts,
        }
    }
}

/// Hero layout at `width`.
pub fn resolve_hero(width: f64, spec: &HeroSpec) -> HeroLayout {
    let compact = is_compact(width, spec.compact_threshold);
    let (compact_per_row, wide_per_row) = spec.actions_per_row;
    HeroLayout {
        is_compact: compact,
        heading_size: spec.heading.pick(compact),
        subtitle_size: spec.subtitle.pick(compact),
        body_size: spec.body.pick(compact),
        actions_per_row: if compact { compact_per_row } else { wide_per_row }.max(1),
    }
}

/// Footer layout at `width`.
pub fn resolve_footer(width: f64, threshold: f64) -> FooterLayout {
    let compact = is_compact(width, threshold);
    FooterLayout {
        is_compact: compact,
        alignment: ContentAlignment::for_compact(compact),
    }
}

/// Every decision the renderer needs for one pass at `width`.
pub fn resolve_screen(width: f64, config: &LayoutConfig) -> ScreenLayout {
    ScreenLayout {
        width,
        hero: resolve_hero(width, &config.hero),
        skills: resolve_section(width, &config.skills),
        contacts: resolve_section(width, &config.contacts),
        footer: resolve_footer(width, config.footer_compact_threshold),
    }
}

/// Split `items` into flow rows of at most `per_row` items.
///
/// # Panics
///
/// Panics if `per_row` is zero.
pub fn flow_rows<T>(items: &[T], per_row: usize) -> std::slice::Chunks<'_, T> {
    assert!(per_row > 0, "flow rows need at least one item per row");
    items.chunks(per_row)
}
