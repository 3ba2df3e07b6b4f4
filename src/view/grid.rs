//! Card placement for the skills and contacts grids.

use super::constants::MIN_CARD_COLUMNS;
use super::metrics::CellMetrics;
use crate::layout::{flow_rows, LayoutDecision};
use ratatui::layout::Rect;

/// Card rectangles relative to the grid origin, plus the grid's height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPlacement {
    pub cards: Vec<Rect>,
    pub height: u16,
}

/// Place cards of the given `heights` in rows of `decision.column_count`.
///
/// Each row is centered in `width` when it fits and start-aligned when it
/// overflows. All cards in a row share the tallest card's height. Rows are
/// separated by the gap converted to rows.
pub fn place_cards(
    width: u16,
    decision: &LayoutDecision,
    gap: f64,
    metrics: CellMetrics,
    heights: &[u16],
) -> GridPlacement {
    let card_width = metrics.columns(decision.card_width).max(MIN_CARD_COLUMNS);
    let gap_columns = metrics.columns(gap);
    let gap_rows = metrics.rows(gap);

    let mut cards = Vec::with_capacity(heights.len());
    let mut y: u16 = 0;

    for (row_index, row) in flow_rows(heights, decision.column_count).enumerate() {
        if row_index > 0 {
            y = y.saturating_add(gap_rows);
        }
        let count = row.len() as u16;
        let row_width = card_width
            .saturating_mul(count)
            .saturating_add(gap_columns.saturating_mul(count - 1));
        let mut x = width.saturating_sub(row_width) / 2;
        let row_height = row.iter().copied().max().unwrap_or(0);

        for _ in row {
            cards.push(Rect::new(x, y, card_width, row_height));
            x = x.saturating_add(card_width).saturating_add(gap_columns);
        }
        y = y.saturating_add(row_height);
    }

    GridPlacement { cards, height: y }
}
