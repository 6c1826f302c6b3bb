//! Creation Screen
//!
//! Drag items into tiers. Tier rows and the unranked shelf are drop
//! targets; every drop dispatches a reassignment through the draft
//! session.

use leptos::prelude::*;
use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, make_on_mouseleave, make_on_unranked_mouseenter,
    DropTarget,
};

use crate::components::{DraggableItem, TierBox};
use crate::context::{use_app_context, Screen};
use crate::models::{Tier, TierItem, TierListPatch};
use crate::reassign::Destination;

#[component]
pub fn CreationScreen() -> impl IntoView {
    let ctx = use_app_context();
    let dnd = create_dnd_signals();

    bind_global_mouseup(dnd, move |item_id, target| {
        let destination = match target {
            DropTarget::Tier(name) => Destination::Tier(name),
            DropTarget::Unranked => Destination::Unranked,
        };
        crate::logging::log(&format!("[DND] drop: item={item_id} dest={destination:?}"));
        ctx.session.update(|s| s.move_item(&item_id, destination));
    });

    let list_name = move || {
        ctx.session
            .with(|s| s.draft().name.clone().unwrap_or_default())
    };
    let tiers = move || {
        ctx.session
            .with(|s| s.draft().tiers.clone().unwrap_or_default())
    };
    let items = move || {
        ctx.session
            .with(|s| s.draft().items.clone().unwrap_or_default())
    };
    // Unranked shelf also carries items whose tier name dangles
    let unranked = move || {
        let tier_names: Vec<String> = tiers().into_iter().map(|t: Tier| t.name).collect();
        items()
            .into_iter()
            .filter(|item: &TierItem| match &item.tier {
                None => true,
                Some(name) => !tier_names.contains(name),
            })
            .collect::<Vec<_>>()
    };

    let on_save = move |_| {
        let Some(list) = ctx.session.with_untracked(|s| s.promote()) else {
            return;
        };
        let id = list.id.clone();
        let already_saved = ctx.repo.with_untracked(|r| r.get_by_id(&id).is_some());
        ctx.repo.update(|r| {
            if already_saved {
                // Template instantiations are added up front; re-saving
                // updates them in place
                r.update(
                    &id,
                    TierListPatch {
                        name: Some(list.name.clone()),
                        description: Some(list.description.clone()),
                        tiers: Some(list.tiers.clone()),
                        items: Some(list.items.clone()),
                        icon: list.icon.clone(),
                    },
                );
            } else {
                r.add(list.clone());
            }
        });
        ctx.sync_repo_error();
        ctx.session.update(|s| s.clear());
        ctx.open_list(&id);
    };

    view! {
        <div class="screen creation-screen">
            <div class="screen-header with-back">
                <button class="btn icon" on:click=move |_| ctx.go(Screen::Init)>
                    "‹"
                </button>
                <h1>{list_name}</h1>
                <button class="btn primary" on:click=on_save>
                    "Save"
                </button>
            </div>

            <div class="tier-rows">
                <For
                    each=tiers
                    key=|tier| tier.name.clone()
                    children=move |tier| {
                        let tier_name = tier.name.clone();
                        let tier_items = Signal::derive(move || {
                            items()
                                .into_iter()
                                .filter(|item| item.tier.as_deref() == Some(tier_name.as_str()))
                                .collect::<Vec<_>>()
                        });
                        view! {
                            <TierBox
                                name=tier.name.clone()
                                color=tier.color.clone()
                                items=tier_items
                                dnd=dnd
                            />
                        }
                    }
                />
            </div>

            <div
                class=move || {
                    let over = matches!(
                        dnd.drop_target_read.get(),
                        Some(DropTarget::Unranked)
                    );
                    if over { "unranked-shelf drop-target" } else { "unranked-shelf" }
                }
                on:mouseenter=make_on_unranked_mouseenter(dnd)
                on:mouseleave=make_on_mouseleave(dnd)
            >
                <h3>{move || format!("Unranked Items ({})", unranked().len())}</h3>
                <div class="unranked-items">
                    <For
                        each=unranked
                        key=|item| item.id.clone()
                        children=move |item| view! { <DraggableItem item=item dnd=dnd /> }
                    />
                </div>
            </div>
        </div>
    }
}
