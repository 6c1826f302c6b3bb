//! Tierlistify Frontend App
//!
//! Wires the durable state owners (repository + draft session) into
//! context and renders the active screen and modal overlay.

use leptos::prelude::*;

use crate::components::{
    CreationScreen, HomeScreen, ImageSearchModal, InitScreen, ItemUploadModal, TierDesignModal,
    ViewScreen,
};
use crate::context::{AppContext, ModalKind, Screen};
use crate::draft::DraftSession;
use crate::repository::TierListRepository;
use crate::storage::{LocalStorageBackend, Store};
use crate::templates::{get_templates, seed_templates_if_absent};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(LocalStorageBackend);

    // Seed built-in templates on first run, then load everything once
    seed_templates_if_absent(&store);
    let templates = get_templates(&store);
    let mut repo = TierListRepository::new(store);
    let load_error = repo.take_error();
    let session = DraftSession::new(store);

    // A non-empty persisted draft resumes where the user left off
    let initial_screen = if session.draft().is_empty() {
        Screen::Home
    } else if session.draft().id.is_some() {
        Screen::Creation
    } else {
        Screen::Init
    };

    let ctx = AppContext {
        screen: RwSignal::new(initial_screen),
        modal: RwSignal::new(None),
        repo: RwSignal::new(repo),
        session: RwSignal::new(session),
        templates: RwSignal::new(templates),
        viewing_id: RwSignal::new(None),
        error: RwSignal::new(load_error),
        item_name: RwSignal::new(String::new()),
        selected_image: RwSignal::new(String::new()),
    };
    provide_context(ctx);

    view! {
        <div class="app-root">
            {move || match ctx.screen.get() {
                Screen::Home => view! { <HomeScreen /> }.into_any(),
                Screen::Init => view! { <InitScreen /> }.into_any(),
                Screen::Creation => view! { <CreationScreen /> }.into_any(),
                Screen::View => view! { <ViewScreen /> }.into_any(),
            }}

            {move || {
                ctx.modal
                    .get()
                    .map(|modal| match modal {
                        ModalKind::ItemUpload => view! { <ItemUploadModal /> }.into_any(),
                        ModalKind::ImageSearch => view! { <ImageSearchModal /> }.into_any(),
                        ModalKind::TierDesign => view! { <TierDesignModal /> }.into_any(),
                    })
            }}
        </div>
    }
}
