//! Modal Shell
//!
//! Bottom-sheet overlay shared by the upload/search/tier modals.

use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Close callback for the backdrop
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal-sheet" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-handle"></div>
                {children()}
            </div>
        </div>
    }
}
