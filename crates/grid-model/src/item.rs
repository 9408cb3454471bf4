//! Item Entity
//!
//! A task placed on the grid as a horizontal run of cells in one row.

use serde::{Deserialize, Serialize};

/// A placed task (matches the `/getScheduledJobs` payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display label
    pub name: String,
    /// Grid row
    pub row: usize,
    /// Leftmost column
    pub column: usize,
    /// Number of columns spanned
    pub width: usize,
    /// Immovable items still block other items
    pub draggable: bool,
}

impl Item {
    pub fn new(name: impl Into<String>, row: usize, column: usize, width: usize, draggable: bool) -> Self {
        Self {
            name: name.into(),
            row,
            column,
            width,
            draggable,
        }
    }

    /// One past the last occupied column, saturating at `usize::MAX`
    pub fn end_column(&self) -> usize {
        self.column.saturating_add(self.width)
    }

    /// True if `column` falls inside `[self.column, self.end_column())`
    pub fn covers(&self, row: usize, column: usize) -> bool {
        self.row == row && column >= self.column && column < self.end_column()
    }

    /// Would this item, placed at `(row, column)`, intersect `other`?
    ///
    /// Half-open intervals `[a, a+wa)` and `[b, b+wb)` intersect iff
    /// `a < b+wb && b < a+wa`.
    pub fn overlaps_at(&self, row: usize, column: usize, other: &Item) -> bool {
        row == other.row && column < other.end_column() && other.column < column.saturating_add(self.width)
    }
}
