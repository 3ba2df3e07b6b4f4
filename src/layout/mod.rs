//! Responsive layout resolution (pure core).
//!
//! Maps a viewport width in logical units to layout decisions: grid column
//! counts, card widths, font tiers and content alignment. Nothing in this
//! module touches the terminal. The view layer calls into it on every
//! render pass and on every resize, so every function here is pure and
//! cheap.
//!
//! # Preconditions
//!
//! Widths are finite and non-negative. Breakpoint tables are non-empty and
//! strictly descending. Violations are programming errors: table
//! construction panics, width checks are `debug_assert!`s.

mod breakpoints;
mod params;
mod resolver;
mod screen;

pub use breakpoints::{resolve_tier, BreakpointError, BreakpointTable};
pub use params::{FontPair, GridSection, HeroSpec, LayoutConfig, SectionSpec};
pub use resolver::{
    is_compact, resolve_card_width, resolve_column_count, resolve_font_tier, resolve_section,
    LayoutDecision, ViewportWidth, DEFAULT_COMPACT_THRESHOLD,
};
pub use screen::{
    flow_rows, resolve_footer, resolve_hero, resolve_screen, ContentAlignment, FooterLayout,
    HeroLayout, ScreenLayout,
};
