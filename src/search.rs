//! Image Search
//!
//! Client for the Unsplash search proxy (a serverless function that
//! holds the API key). The UI debounces keystrokes and tags each
//! request with a sequence number; a response only lands if its
//! sequence still matches the latest issued request.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Debounce window before a keystroke turns into a request
pub const DEFAULT_DEBOUNCE_MS: u32 = 1000;

const SEARCH_ENDPOINT: &str = "/.netlify/functions/unsplash-search";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnsplashUrls {
    /// Canonical unsized URL; sizing directives are appended to this
    pub raw: String,
    pub small: String,
    pub regular: String,
    pub thumb: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnsplashUser {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnsplashImage {
    pub id: String,
    pub urls: UnsplashUrls,
    pub alt_description: Option<String>,
    pub user: UnsplashUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<UnsplashImage>,
    #[serde(default)]
    pub total: u32,
}

/// What the search view shows. Advanced only by the request task
/// whose sequence is still current, so a superseded task can neither
/// deliver results nor leave the view stuck on `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Loading,
    Loaded(Vec<UnsplashImage>),
    Failed(String),
}

/// Derive a fixed-size cropped variant of a raw Unsplash URL.
///
/// Shared contract of the picker grid and thumbnail rendering: the
/// directives are appended exactly once, to the canonical raw URL,
/// never to an already-sized one.
pub fn sized_image_url(raw_url: &str, size: u32) -> String {
    format!("{raw_url}&w={size}&h={size}&fit=crop&crop=center")
}

/// Whether a response with sequence `seq` is still the one the user is
/// waiting for. Late responses from superseded requests are dropped.
pub fn is_current(latest: u64, seq: u64) -> bool {
    latest == seq
}

/// Query the proxy. An empty or whitespace query short-circuits to an
/// empty result set; network or decode failures come back as a string
/// for inline display in the search view.
pub async fn search_images(query: &str) -> Result<Vec<UnsplashImage>, String> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let url = format!(
        "{SEARCH_ENDPOINT}?query={}",
        utf8_percent_encode(query, NON_ALPHANUMERIC)
    );
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let resp = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|e| format!("fetch failed: {e:?}"))?;
    let resp: web_sys::Response = resp
        .dyn_into()
        .map_err(|_| "fetch returned a non-Response".to_string())?;
    if !resp.ok() {
        return Err(format!("search failed with status {}", resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|e| format!("body read failed: {e:?}"))?)
        .await
        .map_err(|e| format!("body read failed: {e:?}"))?;
    let text = text.as_string().unwrap_or_default();

    let parsed: SearchResponse =
        serde_json::from_str(&text).map_err(|e| format!("bad search response: {e}"))?;
    Ok(parsed.results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_url_appends_directives_once() {
        let raw = "https://images.unsplash.com/photo-1?ixid=abc";
        let sized = sized_image_url(raw, 200);
        assert_eq!(
            sized,
            "https://images.unsplash.com/photo-1?ixid=abc&w=200&h=200&fit=crop&crop=center"
        );
        assert_eq!(sized.matches("fit=crop").count(), 1);
    }

    #[test]
    fn test_stale_responses_are_dropped() {
        // Request 3 issued while 2 was in flight: only 3 may land
        assert!(is_current(3, 3));
        assert!(!is_current(3, 2));
    }

    #[test]
    fn test_clearing_the_query_resets_loading() {
        // Request 1 ("cats") starts loading, then the user clears the
        // input; request 2 supersedes it before the response lands.
        let latest = 2u64;
        let mut state = SearchState::Loading;

        // Request 2 (empty query) settles first and owns the view
        if is_current(latest, 2) {
            state = SearchState::Idle;
        }
        // Request 1's late response is dropped without touching it
        if is_current(latest, 1) {
            state = SearchState::Loaded(Vec::new());
        }
        assert_eq!(state, SearchState::Idle);
    }

    #[test]
    fn test_response_decoding() {
        let json = r#"{
            "results": [{
                "id": "img-1",
                "urls": {"raw": "r", "small": "s", "regular": "g", "thumb": "t"},
                "alt_description": null,
                "user": {"name": "Someone"}
            }],
            "total": 1
        }"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.total, 1);
        assert_eq!(parsed.results[0].id, "img-1");
        assert!(parsed.results[0].alt_description.is_none());
    }
}
