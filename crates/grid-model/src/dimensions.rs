//! Grid Bounds and Cell Pitch

use serde::{Deserialize, Serialize};

/// Rendered cell width in pixels
pub const CELL_WIDTH_PX: f64 = 15.0;
/// Rendered cell height in pixels
pub const CELL_HEIGHT_PX: f64 = 40.0;
/// Gap between adjacent cells in pixels
pub const CELL_GAP_PX: f64 = 1.0;

/// Grid size. Owned by whoever configures the grid; the model only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Default for GridDimensions {
    /// One working day: 8 hours in 5-minute slots, 5 lanes.
    fn default() -> Self {
        Self {
            rows: 5,
            columns: (60 / 5) * 8,
        }
    }
}

impl GridDimensions {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn contains_row(&self, row: usize) -> bool {
        row < self.rows
    }

    /// Whether a run of `width` cells starting at `column` fits
    pub fn fits_span(&self, column: usize, width: usize) -> bool {
        column.checked_add(width).is_some_and(|end| end <= self.columns)
    }

    /// Clamp a candidate row into `[0, rows - 1]`
    pub fn clamp_row(&self, raw: i64) -> usize {
        let max = self.rows.saturating_sub(1) as i64;
        raw.min(max).max(0) as usize
    }

    /// Clamp a candidate start column into `[0, columns - width]`.
    /// The lower bound wins when the item is wider than the grid.
    pub fn clamp_column(&self, raw: i64, width: usize) -> usize {
        let max = self.columns.saturating_sub(width) as i64;
        raw.min(max).max(0) as usize
    }
}

/// Distance in pixels from one cell's origin to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPitch {
    pub width: f64,
    pub height: f64,
}

impl Default for CellPitch {
    fn default() -> Self {
        Self {
            width: CELL_WIDTH_PX + CELL_GAP_PX,
            height: CELL_HEIGHT_PX + CELL_GAP_PX,
        }
    }
}

impl CellPitch {
    /// Snap `origin` cells plus `offset` pixels to the nearest cell index.
    pub fn snap(pitch: f64, origin: usize, offset: f64) -> i64 {
        ((origin as f64 * pitch + offset + pitch / 2.0) / pitch).floor() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let dims = GridDimensions::default();
        assert_eq!(dims.rows, 5);
        assert_eq!(dims.columns, 96);
        assert_eq!(dims.cell_count(), 480);
    }

    #[test]
    fn test_clamp_column() {
        let dims = GridDimensions::new(5, 28);
        assert_eq!(dims.clamp_column(-4, 3), 0);
        assert_eq!(dims.clamp_column(10, 3), 10);
        assert_eq!(dims.clamp_column(30, 3), 25);
        // wider than the grid pins to the left edge
        assert_eq!(dims.clamp_column(3, 40), 0);
        assert_eq!(dims.clamp_column(3, usize::MAX), 0);
    }

    #[test]
    fn test_fits_span_does_not_overflow() {
        let dims = GridDimensions::new(5, 28);
        assert!(dims.fits_span(25, 3));
        assert!(!dims.fits_span(26, 3));
        assert!(!dims.fits_span(usize::MAX, 2));
        assert!(!dims.fits_span(1, usize::MAX));
    }

    #[test]
    fn test_clamp_row() {
        let dims = GridDimensions::new(5, 28);
        assert_eq!(dims.clamp_row(-1), 0);
        assert_eq!(dims.clamp_row(4), 4);
        assert_eq!(dims.clamp_row(9), 4);
    }

    #[test]
    fn test_snap_rounds_to_nearest() {
        let pitch = CellPitch::default();
        assert_eq!(pitch.width, 16.0);
        assert_eq!(pitch.height, 41.0);

        assert_eq!(CellPitch::snap(pitch.width, 3, 7.0), 3);
        assert_eq!(CellPitch::snap(pitch.width, 3, 8.0), 4);
        assert_eq!(CellPitch::snap(pitch.width, 3, -8.0), 3);
        assert_eq!(CellPitch::snap(pitch.width, 3, -9.0), 2);
        assert_eq!(CellPitch::snap(pitch.width, 0, -100.0), -6);
        assert_eq!(CellPitch::snap(pitch.height, 1, 20.0), 1);
        assert_eq!(CellPitch::snap(pitch.height, 1, 21.0), 2);
    }
}
