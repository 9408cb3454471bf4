//! Frontend Models
//!
//! Grid types come from `grid-model`; this module adds the demo layout
//! shown before the task service answers.

pub use grid_model::{GridDimensions, GridModel, Item};

/// Placeholder layout, one item per row
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new("Item 1", 0, 0, 3, true),
        Item::new("Item 2", 1, 5, 2, true),
        Item::new("Item 3", 2, 5, 5, true),
        Item::new("Item 4", 3, 5, 7, true),
        Item::new("Item 5", 4, 5, 14, false),
    ]
}
