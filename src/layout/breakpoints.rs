//! Breakpoint tables: ordered width thresholds mapped to values.

use thiserror::Error;

/// Reasons a list of breakpoints cannot form a table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreakpointError {
    /// No entries at all; a table needs at least its floor.
    #[error("breakpoint table must contain at least one entry")]
    Empty,

    /// A threshold is NaN or infinite.
    #[error("breakpoint threshold {0} is not finite")]
    NonFinite(f64),

    /// Thresholds are not strictly descending.
    #[error("breakpoint thresholds must be strictly descending, found {previous} before {next}")]
    NotDescending {
        /// Threshold of the earlier entry.
        previous: f64,
        /// Threshold of the entry that broke the ordering.
        next: f64,
    },
}

/// Ordered `(min_width, value)` pairs, strictly descending by `min_width`.
///
/// The last entry is the floor: its value applies to every width below all
/// other thresholds, regardless of its own threshold.
///
/// ```
/// use folio::layout::BreakpointTable;
///
/// let columns = BreakpointTable::new(vec![(1240.0, 4), (860.0, 2), (0.0, 1)]);
/// assert_eq!(*columns.resolve(1300.0), 4);
/// assert_eq!(*columns.resolve(900.0), 2);
/// assert_eq!(*columns.resolve(320.0), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointTable<V> {
    entries: Vec<(f64, V)>,
}

impl<V> BreakpointTable<V> {
    /// Build a table from entries the caller knows to be well formed.
    ///
    /// # Panics
    ///
    /// Panics if `entries` is empty, holds a non-finite threshold, or is not
    /// strictly descending. Use [`BreakpointTable::try_new`] for tables that
    /// come from user input.
    pub fn new(entries: Vec<(f64, V)>) -> Self {
        match Self::try_new(entries) {
            Ok(table) => table,
            Err(err) => panic!("invalid breakpoint table: {err}"),
        }
    }

    /// Build a table, reporting malformed input instead of panicking.
    pub fn try_new(entries: Vec<(f64, V)>) -> Result<Self, BreakpointError> {
        if entries.is_empty() {
            return Err(BreakpointError::Empty);
        }
        if let Some((threshold, _)) = entries.iter().find(|(t, _)| !t.is_finite()) {
            return Err(BreakpointError::NonFinite(*threshold));
        }
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 <= pair[1].0) {
            return Err(BreakpointError::NotDescending {
                previous: pair[0].0,
                next: pair[1].0,
            });
        }
        Ok(Self { entries })
    }

    /// Entries in descending threshold order.
    pub fn entries(&self) -> &[(f64, V)] {
        &self.entries
    }

    /// Value that applies below every other threshold.
    pub fn floor(&self) -> &V {
        // Non-empty by construction.
        &self.entries[self.entries.len() - 1].1
    }

    /// Value of the first entry whose threshold is `<= width`, or the floor.
    pub fn resolve(&self, width: f64) -> &V {
        debug_assert!(
            width.is_finite() && width >= 0.0,
            "viewport width must be finite and non-negative, got {width}"
        );
        self.entries
            .iter()
            .find(|(threshold, _)| *threshold <= width)
            .map(|(_, value)| value)
            .unwrap_or_else(|| self.floor())
    }

    /// Apply `f` to every value, keeping the thresholds.
    pub fn map<U>(&self, mut f: impl FnMut(&V) -> U) -> BreakpointTable<U> {
        BreakpointTable {
            entries: self.entries.iter().map(|(t, v)| (*t, f(v))).collect(),
        }
    }
}

/// Free-function form of [`BreakpointTable::resolve`] for copyable values.
pub fn resolve_tier<V: Copy>(width: f64, table: &BreakpointTable<V>) -> V {
    *table.resolve(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills_columns() -> BreakpointTable<usize> {
        BreakpointTable::new(vec![(1240.0, 4), (860.0, 2), (0.0, 1)])
    }

    #[test]
    fn resolve_picks_first_threshold_at_or_below_width() {
        let table = skills_columns();
        assert_eq!(resolve_tier(1240.0, &table), 4);
        assert_eq!(resolve_tier(1239.99, &table), 2);
        assert_eq!(resolve_tier(860.0, &table), 2);
        assert_eq!(resolve_tier(859.0, &table), 1);
        assert_eq!(resolve_tier(0.0, &table), 1);
    }

    #[test]
    fn floor_applies_below_its_own_threshold() {
        let table = BreakpointTable::new(vec![(900.0, "wide"), (500.0, "narrow")]);
        assert_eq!(resolve_tier(120.0, &table), "narrow");
        assert_eq!(*table.floor(), "narrow");
    }

    #[test]
    fn single_entry_table_always_returns_floor() {
        let table = BreakpointTable::new(vec![(700.0, 42)]);
        assert_eq!(resolve_tier(0.0, &table), 42);
        assert_eq!(resolve_tier(10_000.0, &table), 42);
    }

    #[test]
    fn try_new_rejects_empty() {
        let result = BreakpointTable::<usize>::try_new(Vec::new());
        assert_eq!(result, Err(BreakpointError::Empty));
    }

    #[test]
    fn try_new_rejects_ascending() {
        let result = BreakpointTable::try_new(vec![(860.0, 2), (1240.0, 4)]);
        assert_eq!(
            result,
            Err(BreakpointError::NotDescending {
                previous: 860.0,
                next: 1240.0
            })
        );
    }

    #[test]
    fn try_new_rejects_duplicate_thresholds() {
        let result = BreakpointTable::try_new(vec![(860.0, 2), (860.0, 3)]);
        assert!(matches!(result, Err(BreakpointError::NotDescending { .. })));
    }

    #[test]
    fn try_new_rejects_nan_threshold() {
        let result = BreakpointTable::try_new(vec![(f64::NAN, 2), (0.0, 1)]);
        assert!(matches!(result, Err(BreakpointError::NonFinite(_))));
    }

    #[test]
    #[should_panic(expected = "invalid breakpoint table")]
    fn new_panics_on_empty_table() {
        let _ = BreakpointTable::<usize>::new(Vec::new());
    }

    #[test]
    fn map_preserves_thresholds() {
        let doubled = skills_columns().map(|v| v * 2);
        assert_eq!(doubled.entries(), &[(1240.0, 8), (860.0, 4), (0.0, 2)]);
    }
}
