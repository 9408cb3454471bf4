//! Schedule Grid App
//!
//! Main application component: dimension inputs, the grid, and a status bar.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{DimensionInputs, ScheduleGrid, StatusBar};
use crate::config::AppConfig;
use crate::context::GridContext;
use crate::loader::{finish_load, LoadStatus};
use crate::models::{seed_items, GridModel};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = GridContext::new(GridModel::new(seed_items()), config.initial_dimensions);
    provide_context(ctx);

    let tasks_url = config.tasks_url();

    // Load tasks on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let url = tasks_url.clone();
        let ticket = ctx.begin_load();
        log::info!("[APP] Loading tasks from {}, trigger={}", url, trigger);

        spawn_local(async move {
            let result = commands::fetch_tasks(&url).await;
            if !ctx.is_current(ticket) {
                log::debug!("[APP] Discarding superseded task load");
                return;
            }

            let dimensions = ctx.dimensions.get_untracked();
            let mut status = LoadStatus::Idle;
            ctx.model.maybe_update(|model| {
                status = finish_load(model, result, dimensions);
                matches!(status, LoadStatus::Loaded { .. })
            });
            ctx.set_status(status);
        });
    });

    view! {
        <div class="App">
            <DimensionInputs />
            <ScheduleGrid />
            <StatusBar />
        </div>
    }
}
