//! Item Upload Modal
//!
//! Finalize a new item for the draft: name it, pick an image from a
//! file upload, an emoji, or the image search.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::{ItemThumb, Modal};
use crate::context::{use_app_context, ModalKind};
use crate::models::{new_id, Draft, TierItem};

#[component]
pub fn ItemUploadModal() -> impl IntoView {
    let ctx = use_app_context();

    let name = ctx.item_name;
    let image = ctx.selected_image;

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Ok(reader) = web_sys::FileReader::new() else {
            return;
        };
        let reader_for_result = reader.clone();
        let onload = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_| {
            if let Some(data_url) = reader_for_result
                .result()
                .ok()
                .and_then(|r| r.as_string())
            {
                image.set(data_url);
            }
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        if let Err(e) = reader.read_as_data_url(&file) {
            crate::logging::error(&format!("[APP] file read failed: {e:?}"));
        }
    };

    let can_create = move || !name.get().is_empty() && !image.get().is_empty();

    let on_create = move |_| {
        if !can_create() {
            return;
        }
        let item = TierItem::new(new_id(), name.get_untracked(), image.get_untracked());
        ctx.session.update(|s| {
            let mut items = s.draft().items.clone().unwrap_or_default();
            items.push(item);
            s.update(Draft {
                items: Some(items),
                ..Default::default()
            });
        });
        name.set(String::new());
        image.set(String::new());
        ctx.close_modal();
    };

    view! {
        <Modal on_close=Callback::new(move |_| ctx.close_modal())>
            <label>"Item name"</label>
            <input
                type="text"
                placeholder="Enter item name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />

            <div class="image-preview">
                {move || {
                    let current = image.get();
                    if current.is_empty() {
                        view! { <p class="placeholder">"Image preview"</p> }.into_any()
                    } else {
                        view! {
                            <ItemThumb item=TierItem::new("preview", "preview", current) />
                        }
                            .into_any()
                    }
                }}
            </div>

            <div class="modal-actions">
                <label class="btn secondary">
                    "Upload Image"
                    <input type="file" accept="image/*" hidden=true on:change=on_file_change />
                </label>
                <button
                    class="btn secondary"
                    on:click=move |_| ctx.open_modal(ModalKind::ImageSearch)
                >
                    "Search Image"
                </button>
            </div>

            <button
                class="btn primary full-width"
                disabled=move || !can_create()
                on:click=on_create
            >
                "Create"
            </button>
        </Modal>
    }
}
