//! Leptos DragDrop Utilities
//!
//! Binds a [`DragController`] to mouse events for the schedule grid.
//! Window-level `mousemove`/`mouseup` listeners exist only while a drag
//! is in progress: they are added on mousedown over a draggable item and
//! removed on mouseup.

use grid_model::{DragController, GestureHooks, GridDimensions, GridModel, PointerPosition};
use leptos::ev;
use leptos::prelude::*;

/// DnD state handles
#[derive(Clone, Copy)]
pub struct GridDnd {
    model: RwSignal<GridModel>,
    dimensions: Signal<GridDimensions>,
    controller: StoredValue<DragController, LocalStorage>,
    listeners: StoredValue<Vec<WindowListenerHandle>, LocalStorage>,
    /// Index of the item being dragged, for styling
    pub dragging_index_read: ReadSignal<Option<usize>>,
    dragging_index_write: WriteSignal<Option<usize>>,
}

pub fn create_grid_dnd(model: RwSignal<GridModel>, dimensions: Signal<GridDimensions>) -> GridDnd {
    let (dragging_index_read, dragging_index_write) = signal(None::<usize>);
    GridDnd {
        model,
        dimensions,
        controller: StoredValue::new_local(DragController::new()),
        listeners: StoredValue::new_local(Vec::new()),
        dragging_index_read,
        dragging_index_write,
    }
}

/// Window listeners tied to the controller's state transitions
struct WindowListeners {
    dnd: GridDnd,
}

impl GestureHooks for WindowListeners {
    fn subscribe(&mut self) {
        let dnd = self.dnd;
        let on_move = window_event_listener(ev::mousemove, move |ev| on_global_mousemove(dnd, &ev));
        let on_up = window_event_listener(ev::mouseup, move |_| end_drag(dnd));
        dnd.listeners.update_value(|handles| {
            handles.push(on_move);
            handles.push(on_up);
        });
    }

    fn unsubscribe(&mut self) {
        let mut handles = Vec::new();
        self.dnd.listeners.update_value(|stored| handles = std::mem::take(stored));
        for handle in handles {
            handle.remove();
        }
    }
}

fn pointer_of(ev: &web_sys::MouseEvent) -> PointerPosition {
    PointerPosition::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Create mousedown handler for a grid cell
pub fn make_on_cell_mousedown(dnd: GridDnd, row: usize, column: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        let pointer = pointer_of(&ev);
        let mut hooks = WindowListeners { dnd };
        let mut started = false;
        dnd.model.with_untracked(|model| {
            dnd.controller
                .update_value(|c| started = c.pointer_down(model, row, column, pointer, &mut hooks));
        });

        if started {
            // keep the browser from starting a text selection or native drag
            ev.prevent_default();
            dnd.dragging_index_write
                .set(dnd.controller.with_value(|c| c.dragged_index()));
        }
    }
}

fn on_global_mousemove(dnd: GridDnd, ev: &web_sys::MouseEvent) {
    let pointer = pointer_of(ev);
    let dimensions = dnd.dimensions.get_untracked();

    dnd.controller.with_value(|c| {
        let Some(index) = c.dragged_index() else {
            return;
        };
        // The task list was reloaded mid-drag; stop highlighting whatever
        // item now sits at the old index
        if dnd.model.with_untracked(|model| c.is_stale(model)) {
            if dnd.dragging_index_read.get_untracked().is_some() {
                dnd.dragging_index_write.set(None);
            }
            return;
        }
        // Only notify the view when the item actually changed cells
        dnd.model.maybe_update(|model| {
            let before = model.get(index).map(|item| (item.row, item.column));
            match c.pointer_move(model, dimensions, pointer) {
                Some(proposal) if proposal.accepted => {
                    before != Some((proposal.row, proposal.column))
                }
                _ => false,
            }
        });
    });
}

/// End drag operation
pub fn end_drag(dnd: GridDnd) {
    let mut hooks = WindowListeners { dnd };
    dnd.controller.update_value(|c| c.pointer_up(&mut hooks));
    dnd.dragging_index_write.set(None);
}
