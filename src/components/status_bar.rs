//! Status Bar Component

use leptos::prelude::*;

use crate::context::GridContext;
use crate::loader::LoadStatus;

#[component]
pub fn StatusBar() -> impl IntoView {
    let ctx = use_context::<GridContext>().expect("GridContext should be provided");

    let summary = move || {
        let dims = ctx.dimensions.get();
        let count = ctx.model.with(|m| m.len());
        format!("{} items on a {} x {} grid", count, dims.rows, dims.columns)
    };
    let is_error = move || matches!(ctx.load_status.get(), LoadStatus::Failed(_));

    view! {
        <div class="status-bar">
            <span class="item-count">{summary}</span>
            <span class=move || if is_error() { "load-status error" } else { "load-status" }>
                {move || ctx.load_status.get().label()}
            </span>
            <button
                class="reload-btn"
                disabled=move || ctx.load_status.get() == LoadStatus::Loading
                on:click=move |_| ctx.reload()
            >
                "Reload"
            </button>
        </div>
    }
}
