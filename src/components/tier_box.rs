//! Tier Box
//!
//! One tier row: colored label on the left, item shelf on the right.
//! With DnD signals attached the row is a drop target and its items
//! are draggable; without them it renders read-only.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_tier_mouseenter, DndSignals, DropTarget};

use crate::components::{DraggableItem, ItemThumb};
use crate::models::TierItem;

#[component]
pub fn TierBox(
    name: String,
    color: String,
    items: Signal<Vec<TierItem>>,
    #[prop(optional)] dnd: Option<DndSignals>,
) -> impl IntoView {
    let tier_name = name.clone();
    let is_drop_target = move || {
        dnd.is_some_and(|dnd| {
            matches!(dnd.drop_target_read.get(), Some(DropTarget::Tier(ref t)) if t == &tier_name)
        })
    };
    let row_class = move || {
        if is_drop_target() {
            "tier-box drop-target"
        } else {
            "tier-box"
        }
    };

    let shelf = move || match dnd {
        Some(dnd) => view! {
            <For
                each=move || items.get()
                key=|item| item.id.clone()
                children=move |item| view! { <DraggableItem item=item dnd=dnd /> }
            />
        }
        .into_any(),
        None => view! {
            <For
                each=move || items.get()
                key=|item| item.id.clone()
                children=move |item| view! { <ItemThumb item=item /> }
            />
        }
        .into_any(),
    };

    let on_mouseenter = dnd.map(|dnd| make_on_tier_mouseenter(dnd, name.clone()));
    let on_mouseleave = dnd.map(make_on_mouseleave);

    view! {
        <div
            class=row_class
            on:mouseenter=move |ev| {
                if let Some(handler) = &on_mouseenter {
                    handler(ev);
                }
            }
            on:mouseleave=move |ev| {
                if let Some(handler) = &on_mouseleave {
                    handler(ev);
                }
            }
        >
            <div class="tier-label" style:background-color=color>
                {name}
            </div>
            <div class="tier-shelf">{shelf}</div>
        </div>
    }
}
