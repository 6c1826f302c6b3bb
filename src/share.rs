//! Sharing
//!
//! Best-effort exposure of a finalized list's address: the native
//! share surface where available, clipboard otherwise. Never blocks
//! core logic; failures surface as strings for inline display.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Shareable address for a finalized list
pub fn list_share_url(list_id: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}/?list={list_id}")
}

/// Offer `url` through navigator.share, falling back to the clipboard
pub async fn share_url(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let navigator = window.navigator();

    if js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false) {
        let data = web_sys::ShareData::new();
        data.set_url(url);
        match JsFuture::from(navigator.share_with_data(&data)).await {
            Ok(_) => return Ok(()),
            // Dismissing the share sheet rejects too; fall through to copy
            Err(e) => {
                crate::logging::log(&format!("[SHARE] native share declined: {e:?}"));
            }
        }
    }

    JsFuture::from(navigator.clipboard().write_text(url))
        .await
        .map(|_| ())
        .map_err(|e| format!("could not copy link: {e:?}"))
}
