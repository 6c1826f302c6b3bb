//! Image Search Modal
//!
//! Debounced Unsplash search. Each keystroke bumps a request sequence;
//! only the response matching the latest sequence may land, so a slow
//! superseded request can never clobber fresher results. An empty
//! query shows emoji quick-picks instead.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Modal;
use crate::context::{use_app_context, ModalKind};
use crate::search::{
    is_current, search_images, sized_image_url, SearchState, DEFAULT_DEBOUNCE_MS,
};

const EMOJI_QUICK_PICKS: &[&str] = &["🍎", "🍌", "🍊", "🍇", "🥝", "🍓", "🥭", "🍑"];

/// Grid thumbnail edge in CSS pixels
const THUMB_SIZE: u32 = 200;

#[component]
pub fn ImageSearchModal() -> impl IntoView {
    let ctx = use_app_context();

    let (query, set_query) = signal(String::new());
    let (state, set_state) = signal(SearchState::Idle);
    let latest_seq = StoredValue::new(0u64);

    Effect::new(move |_| {
        let q = query.get();
        let seq = latest_seq
            .try_update_value(|v| {
                *v += 1;
                *v
            })
            .unwrap_or_default();

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DEFAULT_DEBOUNCE_MS).await;
            // Superseded while waiting out the debounce window
            if !is_current(latest_seq.get_value(), seq) {
                return;
            }
            if q.trim().is_empty() {
                // Also unsticks a Loading left behind by the request
                // this one superseded
                set_state.set(SearchState::Idle);
                return;
            }
            set_state.set(SearchState::Loading);
            let outcome = search_images(&q).await;
            if !is_current(latest_seq.get_value(), seq) {
                // A newer request owns the view now; drop this response
                return;
            }
            match outcome {
                Ok(images) => set_state.set(SearchState::Loaded(images)),
                Err(e) => {
                    crate::logging::error(&format!("[SEARCH] {e}"));
                    set_state.set(SearchState::Failed(e));
                }
            }
        });
    });

    let pick = move |image: String| {
        ctx.selected_image.set(image);
        ctx.open_modal(ModalKind::ItemUpload);
    };

    view! {
        <Modal on_close=Callback::new(move |_| ctx.open_modal(ModalKind::ItemUpload))>
            <input
                type="text"
                placeholder="Search for images..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />

            {move || {
                matches!(state.get(), SearchState::Loading)
                    .then(|| view! { <p class="placeholder">"Searching..."</p> })
            }}
            {move || match state.get() {
                SearchState::Failed(msg) => {
                    Some(view! { <div class="error-banner">{msg}</div> })
                }
                _ => None,
            }}

            {move || {
                if query.get().trim().is_empty() {
                    view! {
                        <div class="search-grid">
                            {EMOJI_QUICK_PICKS
                                .iter()
                                .map(|emoji| {
                                    let glyph = emoji.to_string();
                                    let chosen = glyph.clone();
                                    view! {
                                        <button
                                            class="search-cell emoji"
                                            on:click=move |_| pick(chosen.clone())
                                        >
                                            {glyph}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="search-grid">
                            <For
                                each=move || match state.get() {
                                    SearchState::Loaded(images) => images,
                                    _ => Vec::new(),
                                }
                                key=|img| img.id.clone()
                                children=move |img| {
                                    // Size the raw URL once; downstream
                                    // renderers must not re-append
                                    let sized = sized_image_url(&img.urls.raw, THUMB_SIZE);
                                    let chosen = sized.clone();
                                    let alt = img
                                        .alt_description
                                        .clone()
                                        .unwrap_or_else(|| img.user.name.clone());
                                    view! {
                                        <button
                                            class="search-cell"
                                            on:click=move |_| pick(chosen.clone())
                                        >
                                            <img src=sized alt=alt />
                                        </button>
                                    }
                                }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}
        </Modal>
    }
}
