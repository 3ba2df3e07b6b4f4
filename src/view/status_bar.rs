//! Bottom status bar: link feedback on the left, scroll position on the right.

use super::styles::Theme;
use crate::state::{AppState, StatusMessage};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

const KEY_HINTS: &str = "Tab: links  Enter: open  ?: help  q: quit";

/// Left-hand text: the last link outcome, the focused link, or key hints.
pub fn status_text(state: &AppState) -> String {
    match &state.status {
        Some(StatusMessage::Opened(uri)) => format!("Opened {uri}"),
        Some(StatusMessage::Failed(reason)) => format!("Could not open link: {reason}"),
        None => match state.focused_link() {
            Some(link) => {
                let portfolio = state.portfolio();
                format!(
                    "{} → {}",
                    portfolio.label(link).unwrap_or_default(),
                    portfolio.uri(link).unwrap_or_default()
                )
            }
            None => KEY_HINTS.to_string(),
        },
    }
}

/// Right-hand text, like a pager's position indicator.
pub fn scroll_position(state: &AppState) -> String {
    let max = state.max_scroll_offset();
    let offset = state.scroll_offset();
    if max == 0 {
        "All".to_string()
    } else if offset == 0 {
        "Top".to_string()
    } else if offset >= max {
        "Bot".to_string()
    } else {
        format!("{}%", u32::from(offset) * 100 / u32::from(max))
    }
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    if area.is_empty() {
        return;
    }
    let style = match state.status {
        Some(StatusMessage::Failed(_)) => Style::default().fg(theme.error),
        _ => Style::default().fg(theme.status_bar),
    };
    frame.render_widget(
        Paragraph::new(Line::from(format!(" {}", status_text(state)))).style(style),
        area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(format!("{} ", scroll_position(state))))
            .style(Style::default().fg(theme.status_bar))
            .alignment(Alignment::Right),
        area,
    );
}
