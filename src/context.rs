//! Application Context
//!
//! Shared state provided via Leptos Context API. The repository and
//! draft session are the only durable state owners; everything else is
//! view-local.

use leptos::prelude::*;

use crate::draft::DraftSession;
use crate::models::TierList;
use crate::repository::TierListRepository;
use crate::storage::LocalStorageBackend;

pub type AppRepository = TierListRepository<LocalStorageBackend>;
pub type AppDraftSession = DraftSession<LocalStorageBackend>;

/// Top-level screens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Init,
    Creation,
    View,
}

/// Modal overlays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    ItemUpload,
    ImageSearch,
    TierDesign,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub screen: RwSignal<Screen>,
    pub modal: RwSignal<Option<ModalKind>>,
    /// Finalized lists, write-through to storage
    pub repo: RwSignal<AppRepository>,
    /// The in-progress draft, write-through to its own slot
    pub session: RwSignal<AppDraftSession>,
    /// Seeded template catalog, loaded once at startup
    pub templates: RwSignal<Vec<TierList>>,
    /// Id of the list open on the view screen
    pub viewing_id: RwSignal<Option<String>>,
    /// User-visible storage error banner
    pub error: RwSignal<Option<String>>,
    /// Item-upload state, shared between the upload and search modals
    pub item_name: RwSignal<String>,
    pub selected_image: RwSignal<String>,
}

impl AppContext {
    pub fn go(&self, screen: Screen) {
        self.screen.set(screen);
    }

    pub fn open_modal(&self, modal: ModalKind) {
        self.modal.set(Some(modal));
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }

    /// Open a finalized list, or fall back to Home when the id is gone
    pub fn open_list(&self, id: &str) {
        let known = self.repo.with_untracked(|r| r.get_by_id(id).is_some());
        if known {
            self.viewing_id.set(Some(id.to_string()));
            self.go(Screen::View);
        } else {
            crate::logging::log(&format!("[APP] unknown list id {id}, returning home"));
            self.viewing_id.set(None);
            self.go(Screen::Home);
        }
    }

    /// Pull any pending repository write error into the banner signal
    pub fn sync_repo_error(&self) {
        let pending = self.repo.try_update(|r| r.take_error()).flatten();
        if pending.is_some() {
            self.error.set(pending);
        }
    }
}

/// Get the app context; panics if `App` has not provided it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
