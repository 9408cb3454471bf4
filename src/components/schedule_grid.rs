//! Schedule Grid Component
//!
//! Renders `rows * columns` cells. Each item draws its label in its
//! leftmost (anchor) cell, stretched across the cells it spans.

use leptos::prelude::*;

use grid_model::{CELL_GAP_PX, CELL_HEIGHT_PX, CELL_WIDTH_PX};
use leptos_dragdrop::*;

use crate::context::GridContext;
use crate::models::GridModel;

/// CSS width of an item spanning `width` cells, gaps included
pub fn item_width_css(width: usize) -> String {
    format!(
        "calc({}px * {} + {}px * {})",
        CELL_WIDTH_PX,
        width,
        CELL_GAP_PX,
        width.saturating_sub(1)
    )
}

fn grid_template(columns: usize, rows: usize) -> String {
    format!(
        "grid-template-columns: repeat({}, {}px); grid-template-rows: repeat({}, {}px);",
        columns, CELL_WIDTH_PX, rows, CELL_HEIGHT_PX
    )
}

/// One cell, with the item label when it is an anchor cell
fn grid_cell(dnd: GridDnd, model: &GridModel, row: usize, column: usize, dragging: Option<usize>) -> impl IntoView {
    let occupant = model.occupant_at(row, column);
    let is_dragged = occupant.is_some_and(|o| dragging == Some(o.index));
    let cell_class = if is_dragged { "cell dragover" } else { "cell" };
    let on_mousedown = make_on_cell_mousedown(dnd, row, column);

    let label = occupant
        .filter(|o| o.is_anchor)
        .and_then(|o| model.get(o.index))
        .map(|item| {
            let class = if item.draggable { "draggable" } else { "draggable non-draggable" };
            let style = format!(
                "width: {}; transform: translate(0, -50%); box-sizing: border-box;",
                item_width_css(item.width)
            );
            let name = item.name.clone();
            view! {
                <div class=class style=style>
                    <div class="item-name">{name}</div>
                </div>
            }
        });

    view! {
        <div
            class=cell_class
            on:mousedown=on_mousedown
        >
            {label}
        </div>
    }
}

#[component]
pub fn ScheduleGrid() -> impl IntoView {
    let ctx = use_context::<GridContext>().expect("GridContext should be provided");
    let dnd = create_grid_dnd(ctx.model, ctx.dimensions.into());

    let style = move || {
        let dims = ctx.dimensions.get();
        grid_template(dims.columns, dims.rows)
    };

    let cells = move || {
        let dims = ctx.dimensions.get();
        let dragging = dnd.dragging_index_read.get();
        ctx.model.with(|model| {
            (0..dims.cell_count())
                .map(|index| grid_cell(dnd, model, index / dims.columns, index % dims.columns, dragging))
                .collect_view()
        })
    };

    view! {
        <div class="grid" style=style>
            {cells}
        </div>
    }
}
