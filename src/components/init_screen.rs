//! Init Screen
//!
//! Draft setup: name the list, shape the tier set, collect items.

use leptos::prelude::*;

use crate::components::ItemThumb;
use crate::context::{use_app_context, ModalKind, Screen};
use crate::models::{Draft, Tier};
use crate::templates::default_tiers;

#[component]
pub fn InitScreen() -> impl IntoView {
    let ctx = use_app_context();

    let name = move || {
        ctx.session
            .with(|s| s.draft().name.clone().unwrap_or_default())
    };
    // The tier set being built; defaults until the user customizes it
    let tiers = move || {
        ctx.session
            .with(|s| s.draft().tiers.clone())
            .unwrap_or_else(default_tiers)
    };
    let items = move || {
        ctx.session
            .with(|s| s.draft().items.clone().unwrap_or_default())
    };

    let on_name_input = move |ev| {
        ctx.session.update(|s| {
            s.update(Draft {
                name: Some(event_target_value(&ev)),
                ..Default::default()
            })
        });
    };

    let remove_tier = move |tier_name: String| {
        let remaining: Vec<Tier> = tiers().into_iter().filter(|t| t.name != tier_name).collect();
        // Items pointing at the removed tier keep their dangling name
        // and simply render as unranked.
        ctx.session.update(|s| {
            s.update(Draft {
                tiers: Some(remaining),
                ..Default::default()
            })
        });
    };

    let can_begin = move || !name().is_empty() && !items().is_empty();

    let on_begin = move |_| {
        // Read the tier set before taking the session write guard
        let tiers = tiers();
        ctx.session.update(|s| s.begin(tiers));
        ctx.go(Screen::Creation);
    };

    view! {
        <div class="screen init-screen">
            <div class="screen-header with-back">
                <button class="btn icon" on:click=move |_| ctx.go(Screen::Home)>
                    "‹"
                </button>
                <h1>"Create Tier List"</h1>
            </div>

            <label>"What are you ranking?"</label>
            <input
                type="text"
                placeholder="e.g., Favorite Fruits"
                prop:value=name
                on:input=on_name_input
            />

            <label>"What are the tiers?"</label>
            <div class="tier-grid">
                <For
                    each=tiers
                    key=|tier| tier.name.clone()
                    children=move |tier| {
                        let tier_name = tier.name.clone();
                        view! {
                            <div class="tier-swatch" style:background-color=tier.color.clone()>
                                <span>{tier.name.clone()}</span>
                                <button
                                    class="btn tiny"
                                    on:click=move |_| remove_tier(tier_name.clone())
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
                <button
                    class="tier-swatch add"
                    on:click=move |_| ctx.open_modal(ModalKind::TierDesign)
                >
                    "+"
                </button>
            </div>

            <label>"What are the items?"</label>
            <div class="item-grid">
                <For
                    each=items
                    key=|item| item.id.clone()
                    children=move |item| {
                        view! {
                            <div class="item-cell">
                                <ItemThumb item=item />
                            </div>
                        }
                    }
                />
                <button
                    class="item-cell add"
                    on:click=move |_| ctx.open_modal(ModalKind::ItemUpload)
                >
                    "+"
                </button>
            </div>

            {move || {
                can_begin()
                    .then(|| {
                        view! {
                            <button class="btn primary full-width" on:click=on_begin>
                                "Begin!"
                            </button>
                        }
                    })
            }}
        </div>
    }
}
