use std::cell::RefCell;

use gloo::console;
use gloo::events::EventListener;

use gallery_preview_core::GalleryConfig;

use crate::dom;
use crate::overlay::{MountError, OverlayController};
use crate::page_config::load_gallery_config;
use crate::thumbnails::bind_thumbnails;

thread_local! {
    static CONTROLLER: RefCell<Option<OverlayController>> = RefCell::new(None);
    static READY_LISTENER: RefCell<Option<EventListener>> = RefCell::new(None);
}

/// Mounts the gallery once the document has been parsed.
pub fn install() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            console::warn!("gallery: install skipped", dom::js_error_message(&err));
            return;
        }
    };
    if document.ready_state() != "loading" {
        mount_from_page();
        return;
    }
    let listener = EventListener::once(&document, "DOMContentLoaded", |_event| {
        mount_from_page();
    });
    READY_LISTENER.with(|slot| {
        *slot.borrow_mut() = Some(listener);
    });
}

fn mount_from_page() {
    let config = match dom::document() {
        Ok(document) => load_gallery_config(&document),
        Err(_) => GalleryConfig::default(),
    };
    if let Err(err) = mount(config) {
        console::warn!("gallery: mount failed", err.to_string());
    }
}

/// Mounts a controller for `config` and binds the page's thumbnails. Any
/// controller mounted before is torn down first.
pub fn mount(config: GalleryConfig) -> Result<OverlayController, MountError> {
    let document = dom::document().map_err(|_| MountError::MissingDocument)?;
    let previous = CONTROLLER.with(|slot| slot.borrow_mut().take());
    if let Some(previous) = previous {
        previous.teardown();
    }
    let controller = OverlayController::mount(config, &document)?;
    let bound = match bind_thumbnails(&controller) {
        Ok(bound) => bound,
        Err(err) => {
            controller.teardown();
            return Err(err.into());
        }
    };
    CONTROLLER.with(|slot| {
        *slot.borrow_mut() = Some(controller.clone());
    });
    console::log!(
        "gallery: mounted on",
        format!("#{}", controller.config().overlay_id),
        "thumbnails",
        bound as u32
    );
    Ok(controller)
}

pub fn unmount() {
    let previous = CONTROLLER.with(|slot| slot.borrow_mut().take());
    READY_LISTENER.with(|slot| {
        slot.borrow_mut().take();
    });
    if let Some(controller) = previous {
        controller.teardown();
    }
}

pub fn with_controller<R>(action: impl FnOnce(&OverlayController) -> R) -> Option<R> {
    let controller = CONTROLLER.with(|slot| slot.borrow().clone())?;
    Some(action(&controller))
}
