//! Conversion between terminal cells and logical units.

use crate::config::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};
use crate::layout::ViewportWidth;

/// Logical size of one terminal cell.
///
/// The layout core thinks in logical units (the same units the breakpoints
/// are tuned in). A terminal column is `cell_width` units wide, a row is
/// `cell_height` units tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl CellMetrics {
    /// Metrics from positive, finite cell sizes.
    pub fn new(cell_width: f64, cell_height: f64) -> Self {
        debug_assert!(cell_width.is_finite() && cell_width > 0.0);
        debug_assert!(cell_height.is_finite() && cell_height > 0.0);
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Logical width of `columns` cells.
    pub fn viewport_width(self, columns: u16) -> ViewportWidth {
        ViewportWidth::from_cells(columns, self.cell_width)
    }

    /// Whole columns that fit in `logical` units.
    pub fn columns(self, logical: f64) -> u16 {
        to_cells(logical / self.cell_width)
    }

    /// Whole rows that fit in `logical` units.
    pub fn rows(self, logical: f64) -> u16 {
        to_cells(logical / self.cell_height)
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT)
    }
}

fn to_cells(value: f64) -> u16 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.floor().min(f64::from(u16::MAX)) as u16
    }
}
