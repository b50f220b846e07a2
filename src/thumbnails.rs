use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlAnchorElement, HtmlImageElement, Node};

use gallery_preview_core::{
    FallbackLink, GalleryConfig, KindSource, ThumbnailDescriptor, BOUND_MARKER_ATTRIBUTE,
};

use crate::dom::{create, js_error_message};
use crate::overlay::OverlayController;

pub(crate) struct ThumbnailBinding {
    element: Element,
    _listeners: Vec<EventListener>,
}

impl ThumbnailBinding {
    pub(crate) fn is_for(&self, element: &Element) -> bool {
        let node: &Node = element;
        self.element.is_same_node(Some(node))
    }

    /// Unmarks the element; its listeners go away with the binding.
    pub(crate) fn release(self, config: &GalleryConfig) {
        if let Err(err) = self.element.remove_attribute(BOUND_MARKER_ATTRIBUTE) {
            console::warn!("thumbnails: unmark failed", js_error_message(&err));
        }
        if let Err(err) = self.element.class_list().remove_1(&config.clickable_class) {
            console::warn!("thumbnails: unmark failed", js_error_message(&err));
        }
    }
}

/// Binds every not yet bound element matching the thumbnail selector and
/// returns how many were bound by this call.
pub fn bind_thumbnails(controller: &OverlayController) -> Result<usize, JsValue> {
    let config = controller.config();
    let nodes = controller
        .document()
        .query_selector_all(&config.thumbnail_selector)?;
    let mut bindings = Vec::new();
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        if element.has_attribute(BOUND_MARKER_ATTRIBUTE) {
            continue;
        }
        let descriptor = match read_descriptor(&element, config) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                console::warn!("thumbnails: skipped", err.to_string());
                continue;
            }
        };
        if let Some(binding) = bind_thumbnail(controller, element, descriptor)? {
            bindings.push(binding);
        }
    }
    let count = bindings.len();
    controller.adopt_thumbnails(bindings);
    Ok(count)
}

fn read_descriptor(
    element: &Element,
    config: &GalleryConfig,
) -> Result<ThumbnailDescriptor, gallery_preview_core::DescriptorError> {
    let full = element.get_attribute(&config.full_attribute);
    let kind = element.get_attribute(&config.kind_attribute);
    let descriptor = ThumbnailDescriptor::parse(
        full.as_deref(),
        kind.as_deref(),
        config.infer_kind_from_extension,
    )?;
    if let Some(raw) = descriptor.unknown_kind.as_deref() {
        console::warn!(
            "thumbnails: unknown media kind, showing as",
            descriptor.kind().as_str(),
            raw.to_string(),
            descriptor.src().to_string()
        );
    } else if descriptor.kind_source == KindSource::Extension {
        console::log!("thumbnails: inferred video from extension", descriptor.src().to_string());
    }
    Ok(descriptor)
}

fn bind_thumbnail(
    controller: &OverlayController,
    element: Element,
    descriptor: ThumbnailDescriptor,
) -> Result<Option<ThumbnailBinding>, JsValue> {
    let config = controller.config();
    let image = element.dyn_ref::<HtmlImageElement>();
    if config.bind_error_listeners && image.map(image_already_failed).unwrap_or(false) {
        handle_thumbnail_error(&element, config)?;
        return Ok(None);
    }

    element.class_list().add_1(&config.clickable_class)?;
    element.set_attribute(BOUND_MARKER_ATTRIBUTE, "")?;

    let mut listeners = Vec::with_capacity(2);
    let weak = controller.downgrade();
    let media = descriptor.media;
    listeners.push(EventListener::new(&element, "click", move |_event| {
        if let Some(controller) = OverlayController::upgrade(&weak) {
            controller.open(media.clone());
        }
    }));

    if config.bind_error_listeners && image.is_some() {
        let weak = controller.downgrade();
        let target = element.clone();
        listeners.push(EventListener::new(&element, "error", move |_event| {
            let Some(controller) = OverlayController::upgrade(&weak) else {
                return;
            };
            match handle_thumbnail_error(&target, controller.config()) {
                Ok(Some(_)) => controller.retire_thumbnail(&target),
                Ok(None) => {}
                Err(err) => {
                    console::warn!("thumbnails: fallback failed", js_error_message(&err));
                }
            }
        }));
    }

    Ok(Some(ThumbnailBinding {
        element,
        _listeners: listeners,
    }))
}

/// Replaces a thumbnail whose preview image failed to load with a link to
/// its full asset. Returns the link that was inserted, if any.
pub fn handle_thumbnail_error(
    element: &Element,
    config: &GalleryConfig,
) -> Result<Option<FallbackLink>, JsValue> {
    let full = element.get_attribute(&config.full_attribute);
    let Some(link) = FallbackLink::for_asset(full.as_deref(), &config.fallback_target) else {
        console::warn!("thumbnails: broken thumbnail has no full asset url");
        return Ok(None);
    };
    // Already replaced, e.g. by both an inline handler and our listener.
    let Some(parent) = element.parent_node() else {
        return Ok(None);
    };
    let document = element
        .owner_document()
        .ok_or_else(|| JsValue::from_str("thumbnail has no owner document"))?;
    let anchor: HtmlAnchorElement = create(&document, "a")?;
    anchor.set_href(&link.href);
    anchor.set_target(&link.target);
    anchor.set_text_content(Some(&link.label));
    parent.replace_child(&anchor, element)?;
    console::log!("thumbnails: replaced broken thumbnail", link.label.clone());
    Ok(Some(link))
}

fn image_already_failed(image: &HtmlImageElement) -> bool {
    image.complete() && image.natural_width() == 0 && !image.src().is_empty()
}
