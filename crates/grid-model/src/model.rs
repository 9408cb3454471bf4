//! Grid Model
//!
//! Sole owner of the placed items. Everything that changes an item's
//! position goes through [`GridModel::attempt_move`].

use crate::item::Item;

/// What a single cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellOccupant {
    /// Index of the occupying item
    pub index: usize,
    /// The cell is the item's leftmost cell and carries its label
    pub is_anchor: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridModel {
    items: Vec<Item>,
    revision: u64,
}

impl GridModel {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, revision: 0 }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumped every time the collection is replaced wholesale
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Index of the item covering `(row, column)`, if any
    pub fn find_item_at(&self, row: usize, column: usize) -> Option<usize> {
        self.items.iter().position(|item| item.covers(row, column))
    }

    pub fn occupant_at(&self, row: usize, column: usize) -> Option<CellOccupant> {
        self.find_item_at(row, column).map(|index| CellOccupant {
            index,
            is_anchor: self.items[index].column == column,
        })
    }

    /// Move the item at `index` to `(new_row, new_column)` unless another
    /// item on that row is in the way. Returns whether the move was applied.
    ///
    /// Callers clamp to bounds first; bounds are not rechecked here.
    pub fn attempt_move(&mut self, index: usize, new_row: usize, new_column: usize) -> bool {
        let Some(moving) = self.items.get(index) else {
            return false;
        };

        let blocked = self
            .items
            .iter()
            .enumerate()
            .any(|(i, other)| i != index && moving.overlaps_at(new_row, new_column, other));
        if blocked {
            return false;
        }

        let item = &mut self.items[index];
        if item.row != new_row || item.column != new_column {
            log::debug!(
                "[GRID] {} moved ({}, {}) -> ({}, {})",
                item.name, item.row, item.column, new_row, new_column
            );
        }
        item.row = new_row;
        item.column = new_column;
        true
    }

    /// Discard the current collection and take `items` in its place
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.revision += 1;
    }
}
