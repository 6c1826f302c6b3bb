//! Item Thumbnail
//!
//! Renders an item's image: http(s)/data URIs as <img>, anything else
//! as an inline glyph.

use leptos::prelude::*;

use crate::models::TierItem;

#[component]
pub fn ItemThumb(item: TierItem) -> impl IntoView {
    if item.has_image_url() {
        view! {
            <img class="item-thumb" src=item.image alt=item.name />
        }
        .into_any()
    } else {
        view! {
            <div class="item-thumb item-glyph">{item.image}</div>
        }
        .into_any()
    }
}
