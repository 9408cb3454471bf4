//! UI Components
//!
//! Leptos components for the schedule grid page.

mod schedule_grid;
mod dimension_inputs;
mod status_bar;

pub use schedule_grid::ScheduleGrid;
pub use dimension_inputs::DimensionInputs;
pub use status_bar::StatusBar;
