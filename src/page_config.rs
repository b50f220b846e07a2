use gloo::console;
use web_sys::Document;

use gallery_preview_core::{GalleryConfig, CONFIG_ELEMENT_ID};

/// Reads the gallery config from the page's `#gallery-config` JSON script,
/// falling back to defaults when it is absent or invalid.
pub fn load_gallery_config(document: &Document) -> GalleryConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return GalleryConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    match GalleryConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("gallery: config ignored", err.to_string());
            GalleryConfig::default()
        }
    }
}
