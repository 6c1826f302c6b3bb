//! Home Screen
//!
//! Saved tier lists, template gallery, and the create-new entry point.

use leptos::prelude::*;

use crate::context::{use_app_context, Screen};
use crate::models::Draft;

#[component]
pub fn HomeScreen() -> impl IntoView {
    let ctx = use_app_context();

    let lists = move || ctx.repo.with(|r| r.lists().to_vec());
    let has_lists = move || !lists().is_empty();

    let start_from_template = move |template_id: String| {
        let Some(template) = ctx
            .templates
            .with_untracked(|t| t.iter().find(|t| t.id == template_id).cloned())
        else {
            return;
        };
        let Some(list) = ctx
            .repo
            .try_update(|r| r.instantiate_from_template(&template))
        else {
            return;
        };
        ctx.sync_repo_error();
        // Rank the fresh copy right away
        ctx.session.update(|s| {
            s.clear();
            s.update(Draft::from(list));
        });
        ctx.go(Screen::Creation);
    };

    view! {
        <div class="screen home-screen">
            <div class="screen-header">
                <h1>"Tierlistify"</h1>
                <p class="subtitle">"Create and share tier lists"</p>
            </div>

            {move || {
                ctx.error
                    .get()
                    .map(|msg| view! { <div class="error-banner">{msg}</div> })
            }}

            {move || {
                if has_lists() {
                    view! {
                        <div class="list-section">
                            <h2>"My Tier Lists"</h2>
                            <div class="list-grid">
                                <For
                                    each=lists
                                    key=|list| list.id.clone()
                                    children=move |list| {
                                        let id = list.id.clone();
                                        view! {
                                            <div
                                                class="list-card"
                                                on:click=move |_| ctx.open_list(&id)
                                            >
                                                <div class="list-icon">
                                                    {list.icon.clone().unwrap_or_else(|| "📋".to_string())}
                                                </div>
                                                <p class="list-name">{list.name.clone()}</p>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="empty-state">
                            <h3>"No tier lists yet"</h3>
                            <p>"Create your first tier list to get started"</p>
                        </div>
                    }
                        .into_any()
                }
            }}

            <div class="list-section">
                <h2>"Templates"</h2>
                <div class="list-grid">
                    <For
                        each=move || ctx.templates.get()
                        key=|t| t.id.clone()
                        children=move |template| {
                            let id = template.id.clone();
                            view! {
                                <div
                                    class="list-card template-card"
                                    on:click=move |_| start_from_template(id.clone())
                                >
                                    <div class="list-icon">
                                        {template.icon.clone().unwrap_or_else(|| "📋".to_string())}
                                    </div>
                                    <p class="list-name">{template.name.clone()}</p>
                                    <p class="list-description">{template.description.clone()}</p>
                                </div>
                            }
                        }
                    />
                </div>
            </div>

            <button
                class="btn primary full-width"
                on:click=move |_| {
                    ctx.close_modal();
                    ctx.go(Screen::Init);
                }
            >
                "+ Create New"
            </button>
        </div>
    }
}
