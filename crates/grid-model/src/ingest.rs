//! Ingest Normalization
//!
//! Task lists arrive from outside and may break the non-overlap rule.
//! `normalize` keeps the first valid placement of every cell and drops
//! the rest before anything reaches the [`GridModel`](crate::GridModel).

use thiserror::Error;

use crate::dimensions::GridDimensions;
use crate::item::Item;

/// Why an incoming item was dropped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("width must be at least 1")]
    ZeroWidth,

    #[error("row {row} is outside a grid of {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },

    #[error("columns {column}..{end} exceed a grid of {columns} columns")]
    ColumnOutOfBounds { column: usize, end: usize, columns: usize },

    #[error("overlaps {other} on row {row}")]
    Overlap { other: String, row: usize },
}

/// Outcome of one normalization pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    pub accepted: usize,
    pub rejected: Vec<(String, Rejection)>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

fn check(item: &Item, accepted: &[Item], dims: GridDimensions) -> Result<(), Rejection> {
    if item.width == 0 {
        return Err(Rejection::ZeroWidth);
    }
    if !dims.contains_row(item.row) {
        return Err(Rejection::RowOutOfBounds { row: item.row, rows: dims.rows });
    }
    if !dims.fits_span(item.column, item.width) {
        return Err(Rejection::ColumnOutOfBounds {
            column: item.column,
            end: item.end_column(),
            columns: dims.columns,
        });
    }
    if let Some(other) = accepted.iter().find(|other| item.overlaps_at(item.row, item.column, other)) {
        return Err(Rejection::Overlap { other: other.name.clone(), row: item.row });
    }
    Ok(())
}

/// Filter `incoming` down to a collection that satisfies the grid invariant.
/// Order of the surviving items is preserved.
pub fn normalize(incoming: Vec<Item>, dims: GridDimensions) -> (Vec<Item>, IngestReport) {
    let mut accepted: Vec<Item> = Vec::with_capacity(incoming.len());
    let mut report = IngestReport::default();

    for item in incoming {
        match check(&item, &accepted, dims) {
            Ok(()) => accepted.push(item),
            Err(reason) => {
                log::warn!("[INGEST] dropping {}: {}", item.name, reason);
                report.rejected.push((item.name, reason));
            }
        }
    }

    report.accepted = accepted.len();
    (accepted, report)
}
