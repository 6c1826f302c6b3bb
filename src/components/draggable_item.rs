//! Draggable Item
//!
//! An item thumb wired into the drag gesture state.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::components::ItemThumb;
use crate::models::TierItem;

#[component]
pub fn DraggableItem(item: TierItem, dnd: DndSignals) -> impl IntoView {
    let id = item.id.clone();
    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let is_dragging = move || dnd.dragging_id_read.get().as_deref() == Some(id.as_str());

    view! {
        <div
            class=move || {
                if is_dragging() { "draggable-item dragging" } else { "draggable-item" }
            }
            on:mousedown=on_mousedown
        >
            <ItemThumb item=item />
        </div>
    }
}
