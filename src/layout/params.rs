//! Tunable layout parameters.
//!
//! The breakpoints (700/720/860/1240), card floors (240/250) and font pairs
//! are design-tuned values carried over as defaults. Every one of them can
//! be overridden from the configuration file.

use super::breakpoints::BreakpointTable;
use super::resolver::DEFAULT_COMPACT_THRESHOLD;

/// A value that differs between compact and wide layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontPair {
    /// Used when the viewport is compact.
    pub compact: f64,
    /// Used otherwise.
    pub wide: f64,
}

impl FontPair {
    /// Create a compact/wide pair.
    pub const fn new(compact: f64, wide: f64) -> Self {
        Self { compact, wide }
    }

    /// Pick the value for the given compact state.
    pub fn pick(self, compact: bool) -> f64 {
        if compact {
            self.compact
        } else {
            self.wide
        }
    }
}

/// The two card grids on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridSection {
    /// "Technical Expertise" skill cards.
    Skills,
    /// "Get In Touch" contact cards.
    Contacts,
}

/// Layout parameters for one card grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    /// Width to column-count mapping.
    pub columns: BreakpointTable<usize>,
    /// Horizontal gap between cards.
    pub gap: f64,
    /// Cards never shrink below this width.
    pub min_card_width: f64,
    /// Width below which the section heading is compact.
    pub compact_threshold: f64,
    /// Section heading size.
    pub heading: FontPair,
    /// Section subtitle size.
    pub body: FontPair,
}

impl SectionSpec {
    /// Defaults for the skills grid: 4/2/1 columns, 240 floor.
    pub fn skills() -> Self {
        Self {
            columns: BreakpointTable::new(vec![(1240.0, 4), (860.0, 2), (0.0, 1)]),
            gap: 16.0,
            min_card_width: 240.0,
            compact_threshold: DEFAULT_COMPACT_THRESHOLD,
            heading: FontPair::new(38.0, 54.0),
            body: FontPair::new(20.0, 20.0),
        }
    }

    /// Defaults for the contacts grid: 3/2/1 columns, 250 floor.
    pub fn contacts() -> Self {
        Self {
            columns: BreakpointTable::new(vec![(1240.0, 3), (860.0, 2), (0.0, 1)]),
            min_card_width: 250.0,
            ..Self::skills()
        }
    }

    /// Defaults for `section`.
    pub fn for_section(section: GridSection) -> Self {
        match section {
            GridSection::Skills => Self::skills(),
            GridSection::Contacts => Self::contacts(),
        }
    }
}

/// Layout parameters for the hero banner.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroSpec {
    /// Width below which the hero is compact.
    pub compact_threshold: f64,
    /// Name heading size.
    pub heading: FontPair,
    /// Role pill size.
    pub subtitle: FontPair,
    /// Summary paragraph size.
    pub body: FontPair,
    /// Action buttons per flow row (compact, wide).
    pub actions_per_row: (usize, usize),
}

impl Default for HeroSpec {
    fn default() -> Self {
        Self {
            compact_threshold: DEFAULT_COMPACT_THRESHOLD,
            heading: FontPair::new(48.0, 78.0),
            subtitle: FontPair::new(20.0, 28.0),
            body: FontPair::new(18.0, 22.0),
            actions_per_row: (2, 5),
        }
    }
}

/// Every tunable layout parameter of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Hero banner parameters.
    pub hero: HeroSpec,
    /// Skills grid parameters.
    pub skills: SectionSpec,
    /// Contacts grid parameters.
    pub contacts: SectionSpec,
    /// Width below which the footer centers its content.
    pub footer_compact_threshold: f64,
}

impl LayoutConfig {
    /// Parameters of one grid section.
    pub fn section(&self, section: GridSection) -> &SectionSpec {
        match section {
            GridSection::Skills => &self.skills,
            GridSection::Contacts => &self.contacts,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hero: HeroSpec::default(),
            skills: SectionSpec::skills(),
            contacts: SectionSpec::contacts(),
            footer_compact_threshold: 720.0,
        }
    }
}
