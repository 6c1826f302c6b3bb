//! View Screen
//!
//! Read-only rendering of a finalized list, with share and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ItemThumb, TierBox};
use crate::context::{use_app_context, Screen};
use crate::models::TierList;
use crate::share::{list_share_url, share_url};

#[component]
pub fn ViewScreen() -> impl IntoView {
    let ctx = use_app_context();
    let (share_error, set_share_error) = signal(None::<String>);

    let list = move || -> Option<TierList> {
        let id = ctx.viewing_id.get()?;
        ctx.repo.with(|r| r.get_by_id(&id).cloned())
    };

    let on_share = move |_| {
        let Some(id) = ctx.viewing_id.get_untracked() else {
            return;
        };
        let url = list_share_url(&id);
        spawn_local(async move {
            match share_url(&url).await {
                Ok(()) => set_share_error.set(None),
                Err(e) => set_share_error.set(Some(e)),
            }
        });
    };

    let on_delete = move |_| {
        let Some(id) = ctx.viewing_id.get_untracked() else {
            return;
        };
        ctx.repo.update(|r| r.delete(&id));
        ctx.sync_repo_error();
        ctx.viewing_id.set(None);
        ctx.go(Screen::Home);
    };

    view! {
        {move || match list() {
            Some(list) => {
                let tiers = list.tiers.clone();
                let unranked: Vec<_> = list.unranked_items().into_iter().cloned().collect();
                view! {
                    <div class="screen view-screen">
                        <div class="screen-header with-back">
                            <button class="btn icon" on:click=move |_| ctx.go(Screen::Home)>
                                "‹"
                            </button>
                            <h1>{list.name.clone()}</h1>
                            <button class="btn icon" on:click=on_share>
                                "⇪"
                            </button>
                            <button class="btn icon danger" on:click=on_delete>
                                "🗑"
                            </button>
                        </div>

                        {move || {
                            share_error
                                .get()
                                .map(|msg| view! { <div class="error-banner">{msg}</div> })
                        }}

                        <div class="tier-rows">
                            {tiers
                                .into_iter()
                                .map(|tier| {
                                    let tier_name = tier.name.clone();
                                    let tier_items: Vec<_> = list
                                        .items_in_tier(&tier_name)
                                        .cloned()
                                        .collect();
                                    view! {
                                        <TierBox
                                            name=tier.name
                                            color=tier.color
                                            items=Signal::derive(move || tier_items.clone())
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>

                        {(!unranked.is_empty())
                            .then(|| {
                                view! {
                                    <div class="unranked-shelf">
                                        <h3>{format!("Unranked Items ({})", unranked.len())}</h3>
                                        <div class="unranked-items">
                                            {unranked
                                                .iter()
                                                .map(|item| {
                                                    view! { <ItemThumb item=item.clone() /> }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })}
                    </div>
                }
                    .into_any()
            }
            // The open list disappeared (deleted elsewhere): go home
            None => {
                view! {
                    <div class="screen view-screen">
                        <p>"Tier list not found."</p>
                        <button class="btn primary" on:click=move |_| ctx.go(Screen::Home)>
                            "Back to Home"
                        </button>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
