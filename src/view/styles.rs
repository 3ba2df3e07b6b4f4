//! Palette and color configuration.
//!
//! The theme is plain data handed to the renderer. Nothing reads colors
//! from global state.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether colors are enabled.
///
/// Determined by:
/// - `--no-color` CLI flag / `no_color` config key
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved flag and environment.
    ///
    /// Priority (first match wins):
    /// 1. `no_color_flag` (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Colors of every painted element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Hero
    pub hero_bg: Color,
    pub hero_heading: Color,
    pub hero_pill: Color,
    pub hero_pill_border: Color,
    pub hero_summary: Color,
    pub primary_button_bg: Color,
    pub button_text: Color,
    pub button_border: Color,
    pub scroll_hint: Color,

    // Skills
    pub skills_bg: Color,
    pub skills_heading: Color,
    pub skills_subtitle: Color,
    pub skill_card_bg: Color,
    pub skill_card_border: Color,
    pub skill_card_title: Color,
    pub skill_icon: Color,
    pub skill_item: Color,
    pub skill_dot: Color,

    // Contacts
    pub contacts_bg: Color,
    pub contacts_heading: Color,
    pub contacts_subtitle: Color,
    pub contact_card_bg: Color,
    pub contact_card_border: Color,
    pub contact_badge_bg: Color,
    pub contact_badge_fg: Color,
    pub contact_label: Color,
    pub contact_value: Color,

    // Footer
    pub footer_bg: Color,
    pub footer_text: Color,
    pub footer_status: Color,
    pub footer_dot: Color,

    // Chrome
    pub focus: Color,
    pub status_bar: Color,
    pub error: Color,

    /// False for the colorless theme; focus then falls back to reverse video.
    pub colored: bool,
}

impl Theme {
    /// The portfolio's slate and blue palette.
    pub fn palette() -> Self {
        Self {
            hero_bg: rgb(0x0F172A),
            hero_heading: Color::White,
            hero_pill: rgb(0xD5E5FF),
            hero_pill_border: rgb(0x58A6FF),
            hero_summary: rgb(0xD3DBEA),
            primary_button_bg: rgb(0x2563EB),
            button_text: Color::White,
            button_border: rgb(0x475569),
            scroll_hint: rgb(0x94A3B8),

            skills_bg: rgb(0x111827),
            skills_heading: Color::White,
            skills_subtitle: rgb(0x97A5BC),
            skill_card_bg: rgb(0x1E293B),
            skill_card_border: rgb(0x334155),
            skill_card_title: Color::White,
            skill_icon: rgb(0x1D4ED8),
            skill_item: rgb(0xC1CEDF),
            skill_dot: rgb(0x60A5FA),

            contacts_bg: rgb(0xF8FAFC),
            contacts_heading: rgb(0x0F172A),
            contacts_subtitle: rgb(0x475569),
            contact_card_bg: Color::White,
            contact_card_border: rgb(0xDBE3EF),
            contact_badge_bg: rgb(0xE2ECFF),
            contact_badge_fg: rgb(0x1D4ED8),
            contact_label: rgb(0x64748B),
            contact_value: rgb(0x0F172A),

            footer_bg: rgb(0x020617),
            footer_text: rgb(0x9BA7BC),
            footer_status: rgb(0xBAC4D5),
            footer_dot: rgb(0x22C55E),

            focus: rgb(0xFACC15),
            status_bar: rgb(0x94A3B8),
            error: rgb(0xF87171),

            colored: true,
        }
    }

    /// Every color reset to the terminal default.
    pub fn plain() -> Self {
        let r = Color::Reset;
        Self {
            hero_bg: r,
            hero_heading: r,
            hero_pill: r,
            hero_pill_border: r,
            hero_summary: r,
            primary_button_bg: r,
            button_text: r,
            button_border: r,
            scroll_hint: r,
            skills_bg: r,
            skills_heading: r,
            skills_subtitle: r,
            skill_card_bg: r,
            skill_card_border: r,
            skill_card_title: r,
            skill_icon: r,
            skill_item: r,
            skill_dot: r,
            contacts_bg: r,
            contacts_heading: r,
            contacts_subtitle: r,
            contact_card_bg: r,
            contact_card_border: r,
            contact_badge_bg: r,
            contact_badge_fg: r,
            contact_label: r,
            contact_value: r,
            footer_bg: r,
            footer_text: r,
            footer_status: r,
            footer_dot: r,
            focus: r,
            status_bar: r,
            error: r,
            colored: false,
        }
    }

    /// Palette or plain theme depending on `config`.
    pub fn for_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self::palette()
        } else {
            Self::plain()
        }
    }

    /// Border style of a link, highlighted when focused.
    pub fn link_border(&self, base: Color, focused: bool) -> Style {
        if !focused {
            Style::default().fg(base)
        } else if self.colored {
            Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::palette()
    }
}
