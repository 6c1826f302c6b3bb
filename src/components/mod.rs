//! UI Components

mod creation_screen;
mod draggable_item;
mod home_screen;
mod image_search_modal;
mod init_screen;
mod item_thumb;
mod item_upload_modal;
mod modal;
mod tier_box;
mod tier_design_modal;
mod view_screen;

pub use creation_screen::CreationScreen;
pub use draggable_item::DraggableItem;
pub use home_screen::HomeScreen;
pub use image_search_modal::ImageSearchModal;
pub use init_screen::InitScreen;
pub use item_thumb::ItemThumb;
pub use item_upload_modal::ItemUploadModal;
pub use modal::Modal;
pub use tier_box::TierBox;
pub use tier_design_modal::TierDesignModal;
pub use view_screen::ViewScreen;
