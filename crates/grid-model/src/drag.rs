//! Drag Controller
//!
//! Turns a mouse gesture into a stream of cell proposals for the
//! [`GridModel`]. The controller never touches items itself.
//!
//! ```text
//! Idle --pointer_down(draggable)--> Dragging --pointer_up--> Idle
//!                                    |    ^
//!                                    +----+ pointer_move
//! ```

use crate::dimensions::{CellPitch, GridDimensions};
use crate::model::GridModel;

/// Screen coordinates of the pointer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Global listener registration, driven by state transitions.
///
/// `subscribe` runs on `Idle -> Dragging`, `unsubscribe` on `Dragging -> Idle`.
pub trait GestureHooks {
    fn subscribe(&mut self);
    fn unsubscribe(&mut self);
}

/// State of one in-progress gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub item_index: usize,
    pub start: PointerPosition,
    /// Item cell when the gesture began; offsets are measured from here
    pub origin_row: usize,
    pub origin_column: usize,
    /// Model revision the session indexes into
    pub revision: u64,
}

/// Result of one pointer-move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveProposal {
    pub row: usize,
    pub column: usize,
    pub accepted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: Option<DragSession>,
    pitch: CellPitch,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pitch(pitch: CellPitch) -> Self {
        Self { session: None, pitch }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.session.map(|s| s.item_index)
    }

    /// A session is open but the collection it indexes into was replaced
    pub fn is_stale(&self, model: &GridModel) -> bool {
        self.session.is_some_and(|s| s.revision != model.revision())
    }

    /// Start a drag if `(row, column)` holds a draggable item.
    ///
    /// Returns true when the gesture was taken; the caller should then
    /// suppress the platform's default drag/selection behavior.
    pub fn pointer_down<H: GestureHooks>(
        &mut self,
        model: &GridModel,
        row: usize,
        column: usize,
        pointer: PointerPosition,
        hooks: &mut H,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        let Some(index) = model.find_item_at(row, column) else {
            return false;
        };
        let Some(item) = model.get(index).filter(|item| item.draggable) else {
            return false;
        };

        self.session = Some(DragSession {
            item_index: index,
            start: pointer,
            origin_row: item.row,
            origin_column: item.column,
            revision: model.revision(),
        });
        log::debug!("[DND] drag start: {} at ({}, {})", item.name, item.row, item.column);
        hooks.subscribe();
        true
    }

    /// Snap the pointer to a cell and ask the model to move there.
    pub fn pointer_move(
        &self,
        model: &mut GridModel,
        dimensions: GridDimensions,
        pointer: PointerPosition,
    ) -> Option<MoveProposal> {
        let session = self.session?;
        if self.is_stale(model) {
            return None;
        }
        let width = model.get(session.item_index)?.width;

        let offset_x = pointer.x - session.start.x;
        let offset_y = pointer.y - session.start.y;

        let raw_column = CellPitch::snap(self.pitch.width, session.origin_column, offset_x);
        let raw_row = CellPitch::snap(self.pitch.height, session.origin_row, offset_y);
        let column = dimensions.clamp_column(raw_column, width);
        let row = dimensions.clamp_row(raw_row);
        debug_assert!(width > dimensions.columns || dimensions.fits_span(column, width));

        let accepted = model.attempt_move(session.item_index, row, column);
        Some(MoveProposal { row, column, accepted })
    }

    /// End the gesture. The item stays where it was last accepted.
    pub fn pointer_up<H: GestureHooks>(&mut self, hooks: &mut H) {
        if let Some(session) = self.session.take() {
            log::debug!("[DND] drag end: item {}", session.item_index);
            hooks.unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    #[derive(Default)]
    struct CountingHooks {
        subscribed: u32,
        unsubscribed: u32,
    }

    impl GestureHooks for CountingHooks {
        fn subscribe(&mut self) {
            self.subscribed += 1;
        }
        fn unsubscribe(&mut self) {
            self.unsubscribed += 1;
        }
    }

    fn model() -> GridModel {
        GridModel::new(vec![
            Item::new("A", 0, 4, 3, true),
            Item::new("Locked", 2, 0, 5, false),
        ])
    }

    #[test]
    fn test_pointer_down_on_draggable() {
        let m = model();
        let mut ctrl = DragController::new();
        let mut hooks = CountingHooks::default();

        assert!(ctrl.pointer_down(&m, 0, 5, PointerPosition::new(100.0, 10.0), &mut hooks));
        assert_eq!(ctrl.dragged_index(), Some(0));
        assert_eq!(hooks.subscribed, 1);
        let session = ctrl.session().unwrap();
        assert_eq!((session.origin_row, session.origin_column), (0, 4));
    }

    #[test]
    fn test_pointer_down_ignores_empty_and_locked() {
        let m = model();
        let mut ctrl = DragController::new();
        let mut hooks = CountingHooks::default();

        assert!(!ctrl.pointer_down(&m, 0, 0, PointerPosition::default(), &mut hooks));
        for column in 0..5 {
            assert!(!ctrl.pointer_down(&m, 2, column, PointerPosition::default(), &mut hooks));
        }
        assert!(!ctrl.is_dragging());
        assert_eq!(hooks.subscribed, 0);
    }

    #[test]
    fn test_second_pointer_down_ignored() {
        let m = model();
        let mut ctrl = DragController::new();
        let mut hooks = CountingHooks::default();

        assert!(ctrl.pointer_down(&m, 0, 4, PointerPosition::default(), &mut hooks));
        assert!(!ctrl.pointer_down(&m, 0, 6, PointerPosition::new(5.0, 5.0), &mut hooks));
        assert_eq!(hooks.subscribed, 1);
    }

    #[test]
    fn test_move_snaps_and_commits() {
        let mut m = model();
        let dims = GridDimensions::new(5, 28);
        let mut ctrl = DragController::new();
        let mut hooks = CountingHooks::default();
        ctrl.pointer_down(&m, 0, 4, PointerPosition::new(100.0, 10.0), &mut hooks);

        // two cells right, one row down
        let p = ctrl.pointer_move(&mut m, dims, PointerPosition::new(132.0, 51.0)).unwrap();
        assert_eq!(p, MoveProposal { row: 1, column: 6, accepted: true });
        assert_eq!((m.get(0).unwrap().row, m.get(0).unwrap().column), (1, 6));

        // offsets stay relative to the gesture origin, not the last commit
        let p = ctrl.pointer_move(&mut m, dims, PointerPosition::new(132.0, 51.0)).unwrap();
        assert_eq!((p.row, p.column), (1, 6));
    }

    #[test]
    fn test_move_into_locked_item_rejected() {
        let mut m = model();
        let dims = GridDimensions::new(5, 28);
        let mut ctrl = DragController::new();
        let mut hooks = CountingHooks::default();
        ctrl.pointer_down(&m, 0, 4, PointerPosition::new(0.0, 0.0), &mut hooks);

        // two rows down lands on Locked [0,5)
        let p = ctrl.pointer_move(&mut m, dims, PointerPosition::new(0.0, 82.0)).unwrap();
        assert_eq!(p, MoveProposal { row: 2, column: 4, accepted: false });
        assert_eq!((m.get(0).unwrap().row, m.get(0).unwrap().column), (0, 4));
    }

    #[test]
    fn test_move_when_idle_is_none() {
        let mut m = model();
        let ctrl = DragController::new();
        assert!(ctrl
            .pointer_move(&mut m, GridDimensions::default(), PointerPosition::new(50.0, 50.0))
            .is_none());
    }

    #[test]
    fn test_stale_session_after_replace() {
        let mut m = model();
        let mut ctrl = DragController::new();
        let mut hooks = CountingHooks::default();
        ctrl.pointer_down(&m, 0, 4, PointerPosition::default(), &mut hooks);

        assert!(!ctrl.is_stale(&m));
        m.replace_items(vec![Item::new("New", 0, 0, 2, true)]);
        assert!(ctrl.is_stale(&m));
        assert_eq!(ctrl.dragged_index(), Some(0));
        let before = m.clone();
        assert!(ctrl
            .pointer_move(&mut m, GridDimensions::default(), PointerPosition::new(64.0, 0.0))
            .is_none());
        assert_eq!(m, before);
    }

    #[test]
    fn test_idle_is_never_stale() {
        let mut m = model();
        let ctrl = DragController::new();
        m.replace_items(Vec::new());
        assert!(!ctrl.is_stale(&m));
    }

    #[test]
    fn test_item_wider_than_grid_pins_left() {
        let mut m = GridModel::new(vec![Item::new("Wide", 0, 0, 30, true)]);
        let dims = GridDimensions::new(5, 28);
        let mut ctrl = DragController::new();
        let mut hooks = CountingHooks::default();
        ctrl.pointer_down(&m, 0, 10, PointerPosition::default(), &mut hooks);

        let p = ctrl.pointer_move(&mut m, dims, PointerPosition::new(200.0, 0.0)).unwrap();
        assert_eq!((p.row, p.column), (0, 0));
    }

    #[test]
    fn test_moves_stay_inside_columns() {
        let mut m = GridModel::new(vec![Item::new("A", 0, 0, 5, true)]);
        let dims = GridDimensions::new(5, 28);
        let mut ctrl = DragController::new();
        let mut hooks = CountingHooks::default();
        ctrl.pointer_down(&m, 0, 0, PointerPosition::default(), &mut hooks);

        for x in (-400..=800).step_by(37) {
            let p = ctrl.pointer_move(&mut m, dims, PointerPosition::new(f64::from(x), 0.0)).unwrap();
            assert!(dims.fits_span(p.column, 5));
        }
    }

    #[test]
    fn test_pointer_up_unsubscribes_once() {
        let m = model();
        let mut ctrl = DragController::new();
        let mut hooks = CountingHooks::default();

        ctrl.pointer_up(&mut hooks);
        assert_eq!(hooks.unsubscribed, 0);

        ctrl.pointer_down(&m, 0, 4, PointerPosition::default(), &mut hooks);
        ctrl.pointer_up(&mut hooks);
        ctrl.pointer_up(&mut hooks);
        assert_eq!(hooks.subscribed, 1);
        assert_eq!(hooks.unsubscribed, 1);
        assert!(!ctrl.is_dragging());
    }
}
