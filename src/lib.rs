//! Lightbox preview for server-rendered gallery pages.
//!
//! Thumbnails carrying a full asset url open a modal preview overlay; broken
//! thumbnails are swapped for a plain link to the asset.

mod dom;
mod exports;
mod forms;
mod overlay;
mod page_config;
mod render;
mod runtime;
mod thumbnails;

pub use dom::js_error_message;
pub use forms::submit_form;
pub use overlay::{MountError, OverlayController};
pub use page_config::load_gallery_config;
pub use runtime::{install, mount, unmount, with_controller};
pub use thumbnails::{bind_thumbnails, handle_thumbnail_error};

pub use gallery_preview_core::{
    CloseReason, FallbackLink, GalleryConfig, MediaKind, MediaRef, OverlayAction, OverlayState,
    Transition,
};
