//! Tier Design Modal
//!
//! Add a custom tier (label + color) to the draft's tier set.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::models::{Draft, Tier};
use crate::templates::default_tiers;

const PREDEFINED_COLORS: &[&str] = &[
    "#ffb3ba", "#ffdfba", "#ffffba", "#baffc9", "#bae1ff", "#c9c9ff", "#ffb3d1", "#ffcccb",
    "#d3d3d3", "#98fb98",
];

#[component]
pub fn TierDesignModal() -> impl IntoView {
    let ctx = use_app_context();

    let (tier_name, set_tier_name) = signal(String::new());
    let (color, set_color) = signal(PREDEFINED_COLORS[0].to_string());
    let (error, set_error) = signal(None::<String>);

    let on_save = move |_| {
        let name = tier_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        let mut tiers = ctx
            .session
            .with_untracked(|s| s.draft().tiers.clone())
            .unwrap_or_else(default_tiers);
        // Tier names are the assignment keys, so they must stay unique
        if tiers.iter().any(|t| t.name == name) {
            set_error.set(Some(format!("A tier named \"{name}\" already exists")));
            return;
        }
        tiers.push(Tier::new(name, color.get_untracked()));
        ctx.session.update(|s| {
            s.update(Draft {
                tiers: Some(tiers),
                ..Default::default()
            })
        });
        ctx.close_modal();
    };

    view! {
        <Modal on_close=Callback::new(move |_| ctx.close_modal())>
            <h2>"Design Tier"</h2>

            <label>"Tier Name"</label>
            <input
                type="text"
                placeholder="e.g., Amazing, Good, Okay"
                maxlength="20"
                prop:value=move || tier_name.get()
                on:input=move |ev| {
                    set_error.set(None);
                    set_tier_name.set(event_target_value(&ev));
                }
            />

            {move || {
                error
                    .get()
                    .map(|msg| view! { <div class="error-banner">{msg}</div> })
            }}

            <label>"Tier Color"</label>
            <div class="color-grid">
                {PREDEFINED_COLORS
                    .iter()
                    .map(|&swatch| {
                        let value = swatch.to_string();
                        let chosen = value.clone();
                        let is_selected = move || color.get() == value;
                        view! {
                            <button
                                class=move || {
                                    if is_selected() { "color-swatch selected" } else { "color-swatch" }
                                }
                                style:background-color=swatch
                                on:click=move |_| set_color.set(chosen.clone())
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
            <input
                type="color"
                prop:value=move || color.get()
                on:input=move |ev| set_color.set(event_target_value(&ev))
            />

            <div class="modal-actions">
                <button class="btn secondary" on:click=move |_| ctx.close_modal()>
                    "Cancel"
                </button>
                <button
                    class="btn primary"
                    disabled=move || tier_name.get().trim().is_empty()
                    on:click=on_save
                >
                    "Create"
                </button>
            </div>
        </Modal>
    }
}
