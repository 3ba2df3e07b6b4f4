//! Width to layout-decision functions.

use super::breakpoints::resolve_tier;
use super::params::SectionSpec;

/// Width below which headings and body text switch to their compact size.
pub const DEFAULT_COMPACT_THRESHOLD: f64 = 700.0;

/// Available horizontal space for one render pass, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ViewportWidth(f64);

impl ViewportWidth {
    /// Wrap a logical width.
    ///
    /// The width must be finite and non-negative; this is checked in debug
    /// builds only.
    pub fn new(width: f64) -> Self {
        debug_assert_width(width);
        Self(width)
    }

    /// Logical width of `columns` terminal cells, each `cell_width` units wide.
    pub fn from_cells(columns: u16, cell_width: f64) -> Self {
        Self::new(f64::from(columns) * cell_width)
    }

    /// The raw logical width.
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Layout of one card grid for a given width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutDecision {
    /// Cards per row, at least 1.
    pub column_count: usize,
    /// Width of each card, never below the section's floor.
    pub card_width: f64,
    /// Section heading size.
    pub heading_size: f64,
    /// Section body size.
    pub body_size: f64,
    /// Whether the section is below its compact threshold.
    pub is_compact: bool,
}

#[inline]
fn debug_assert_width(width: f64) {
    debug_assert!(
        width.is_finite() && width >= 0.0,
        "viewport width must be finite and non-negative, got {width}"
    );
}

/// Number of cards per row for `section` at `width`. Always at least 1.
pub fn resolve_column_count(width: f64, section: &SectionSpec) -> usize {
    let columns = resolve_tier(width, &section.columns);
    debug_assert!(columns >= 1, "column tables never resolve to zero");
    columns
}

/// Width of each of `column_count` cards separated by `gap`, clamped up to
/// `minimum_card_width`.
///
/// When the clamp kicks in the row is wider than `width` and the cards
/// overflow their container.
pub fn resolve_card_width(
    width: f64,
    column_count: usize,
    gap: f64,
    minimum_card_width: f64,
) -> f64 {
    debug_assert_width(width);
    debug_assert!(column_count >= 1, "column count must be at least 1");

    let columns = column_count as f64;
    let raw = (width - gap * (columns - 1.0)) / columns;
    raw.max(minimum_card_width)
}

/// True iff `width` is strictly below `threshold`.
pub fn is_compact(width: f64, threshold: f64) -> bool {
    debug_assert_width(width);
    width < threshold
}

/// `compact_value` below [`DEFAULT_COMPACT_THRESHOLD`], else `wide_value`.
pub fn resolve_font_tier(width: f64, compact_value: f64, wide_value: f64) -> f64 {
    if is_compact(width, DEFAULT_COMPACT_THRESHOLD) {
        compact_value
    } else {
        wide_value
    }
}

/// Full decision for one grid section.
pub fn resolve_section(width: f64, section: &SectionSpec) -> LayoutDecision {
    let column_count = resolve_column_count(width, section);
    let compact = is_compact(width, section.compact_threshold);
    LayoutDecision {
        column_count,
        card_width: resolve_card_width(width, column_count, section.gap, section.min_card_width),
        heading_size: section.heading.pick(compact),
        body_size: section.body.pick(compact),
        is_compact: compact,
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
