//! Help overlay listing the key bindings.
//!
//! Shows a centered modal over the document. Toggled by '?', dismissed by
//! 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Scrolling",
        &[
            ("j/↓", "Scroll down"),
            ("k/↑", "Scroll up"),
            ("Ctrl+d/PgDn/Space", "Page down"),
            ("Ctrl+u/PgUp", "Page up"),
            ("g/Home", "Go to top"),
            ("G/End", "Go to bottom"),
        ],
    ),
    (
        "Links",
        &[
            ("Tab", "Focus next link"),
            ("Shift+Tab", "Focus previous link"),
            ("Enter/o", "Open focused link"),
            ("Click", "Open link under the mouse"),
            ("Esc", "Clear focus"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Render the help overlay centered in the frame.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );
    if popup_area.is_empty() {
        return;
    }

    frame.render_widget(Clear, popup_area);

    let help = Paragraph::new(build_help_content(theme))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.focus)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);
    frame.render_widget(help, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        Style::default()
            .fg(theme.status_bar)
            .add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Rect of `percent_x` by `percent_y` of `area`, centered in it.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let popup_height = (u32::from(area.height) * u32::from(percent_y) / 100) as u16;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(theme: &Theme) -> Vec<Line<'static>> {
    let category_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let key_style = Style::default().fg(theme.focus).add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (index, (category, keys)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, category_style)));
        for (key, description) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<18}"), key_style),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
