//! Dimension Inputs Component
//!
//! Number inputs for the grid size.

use leptos::prelude::*;

use crate::context::GridContext;

/// Positive integer from an input value, or None to keep the old size
pub fn parse_dimension(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|v| *v >= 1)
}

#[component]
pub fn DimensionInputs() -> impl IntoView {
    let ctx = use_context::<GridContext>().expect("GridContext should be provided");

    let on_rows = move |ev: web_sys::Event| {
        if let Some(rows) = parse_dimension(&event_target_value(&ev)) {
            ctx.dimensions.update(|d| d.rows = rows);
        }
    };
    let on_columns = move |ev: web_sys::Event| {
        if let Some(columns) = parse_dimension(&event_target_value(&ev)) {
            ctx.dimensions.update(|d| d.columns = columns);
        }
    };

    view! {
        <div class="dimension-inputs">
            <label>
                "Rows:"
                <input
                    type="number"
                    min="1"
                    prop:value=move || ctx.dimensions.get().rows.to_string()
                    on:change=on_rows
                />
            </label>
            <label>
                "Columns:"
                <input
                    type="number"
                    min="1"
                    prop:value=move || ctx.dimensions.get().columns.to_string()
                    on:change=on_columns
                />
            </label>
        </div>
    }
}
