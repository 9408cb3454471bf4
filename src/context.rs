//! Application Context
//!
//! Shared state provided via Leptos Context API. The grid model lives in
//! exactly one signal here; components hold copies of the handle only.

use leptos::prelude::*;

use crate::loader::{LoadSequencer, LoadStatus, LoadTicket};
use crate::models::{GridDimensions, GridModel};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct GridContext {
    /// Placed items
    pub model: RwSignal<GridModel>,
    /// Current grid size, edited by the dimension inputs
    pub dimensions: RwSignal<GridDimensions>,
    /// Status of the most recent task load - read
    pub load_status: ReadSignal<LoadStatus>,
    /// Status of the most recent task load - write
    set_load_status: WriteSignal<LoadStatus>,
    /// Trigger to refetch tasks - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch tasks - write
    set_reload_trigger: WriteSignal<u32>,
    sequencer: StoredValue<LoadSequencer>,
}

impl GridContext {
    pub fn new(model: GridModel, dimensions: GridDimensions) -> Self {
        let (load_status, set_load_status) = signal(LoadStatus::default());
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            model: RwSignal::new(model),
            dimensions: RwSignal::new(dimensions),
            load_status,
            set_load_status,
            reload_trigger,
            set_reload_trigger,
            sequencer: StoredValue::new(LoadSequencer::default()),
        }
    }

    /// Trigger a refetch of the task list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn set_status(&self, status: LoadStatus) {
        self.set_load_status.set(status);
    }

    /// Take a ticket for a new load and mark the grid as loading
    pub fn begin_load(&self) -> LoadTicket {
        let mut ticket = LoadTicket::default();
        self.sequencer.update_value(|seq| ticket = seq.begin());
        self.set_load_status.set(LoadStatus::Loading);
        ticket
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.sequencer.with_value(|seq| seq.is_current(ticket))
    }
}
