//! Functions callable from the host page, e.g. `onerror="handleError(this)"`.

use gloo::console;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use gallery_preview_core::{CloseReason, MediaKind, MediaRef};

use crate::dom;
use crate::forms;
use crate::runtime::with_controller;
use crate::thumbnails;

#[wasm_bindgen(js_name = openPreview)]
pub fn open_preview(src: String, is_video: Option<bool>) {
    let media = MediaRef::new(src, MediaKind::from_video_flag(is_video.unwrap_or(false)));
    if with_controller(|controller| controller.open(media)).is_none() {
        console::warn!("preview: open ignored, gallery not mounted");
    }
}

#[wasm_bindgen(js_name = closePreview)]
pub fn close_preview() {
    with_controller(|controller| controller.close(CloseReason::Api));
}

#[wasm_bindgen(js_name = handleError)]
pub fn handle_error(element: Element) {
    let controller = with_controller(|controller| controller.clone());
    let config = controller
        .as_ref()
        .map(|controller| controller.config().clone())
        .unwrap_or_default();
    match thumbnails::handle_thumbnail_error(&element, &config) {
        Ok(Some(_)) => {
            if let Some(controller) = controller {
                controller.retire_thumbnail(&element);
            }
        }
        Ok(None) => {}
        Err(err) => {
            console::warn!("thumbnails: fallback failed", dom::js_error_message(&err));
        }
    }
}

#[wasm_bindgen(js_name = submitForm)]
pub fn submit_form(form_id: &str) -> bool {
    match dom::document() {
        Ok(document) => forms::submit_form(&document, form_id),
        Err(_) => false,
    }
}

#[wasm_bindgen(js_name = bindThumbnails)]
pub fn bind_thumbnails() -> u32 {
    let bound = with_controller(thumbnails::bind_thumbnails).unwrap_or(Ok(0));
    match bound {
        Ok(count) => count as u32,
        Err(err) => {
            console::warn!("thumbnails: bind failed", dom::js_error_message(&err));
            0
        }
    }
}

#[wasm_bindgen(js_name = teardownGallery)]
pub fn teardown_gallery() {
    crate::runtime::unmount();
}

