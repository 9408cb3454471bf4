//! Grid Model
//!
//! Placement rules for the schedule grid: items, bounds, drag snapping
//! and same-row collision checks. No browser dependencies, so everything
//! here runs under plain `cargo test`.

mod item;
mod dimensions;
mod model;
mod drag;
pub mod ingest;

pub use item::Item;
pub use dimensions::{CellPitch, GridDimensions, CELL_GAP_PX, CELL_HEIGHT_PX, CELL_WIDTH_PX};
pub use model::{CellOccupant, GridModel};
pub use drag::{DragController, DragSession, GestureHooks, MoveProposal, PointerPosition};
pub use ingest::{IngestReport, Rejection};
