use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlImageElement, HtmlVideoElement};

use gallery_preview_core::{MediaElement, MediaKind, OverlayView};

use crate::dom::{clear_children, create, set_display};

/// Rebuilds the overlay container from `view` and returns the listeners
/// owned by the new content.
pub(crate) fn render_overlay(
    document: &Document,
    container: &HtmlElement,
    view: &OverlayView,
    on_close: Rc<dyn Fn()>,
) -> Result<Vec<EventListener>, JsValue> {
    clear_children(container);
    set_display(container, view.display())?;
    let OverlayView::Shown { content, .. } = view else {
        return Ok(Vec::new());
    };

    let content_box: HtmlElement = create(document, "div")?;
    content_box.set_class_name(&content.box_class);
    let contain_clicks = EventListener::new(&content_box, "click", |event| {
        event.stop_propagation();
    });

    let media = build_media(document, &content.media)?;

    let close: HtmlButtonElement = create(document, "button")?;
    close.set_type("button");
    close.set_class_name(&content.close.class);
    close.set_text_content(Some(&content.close.label));
    let close_click = EventListener::new(&close, "click", move |_event| {
        on_close();
    });

    content_box.append_child(&media)?;
    content_box.append_child(&close)?;
    container.append_child(&content_box)?;
    Ok(vec![contain_clicks, close_click])
}

fn build_media(document: &Document, media: &MediaElement) -> Result<HtmlElement, JsValue> {
    match media.kind {
        MediaKind::Video => {
            let video: HtmlVideoElement = create(document, media.tag())?;
            video.set_class_name(&media.class);
            video.set_controls(media.controls);
            video.set_autoplay(media.autoplay);
            video.set_src(&media.src);
            Ok(video.into())
        }
        MediaKind::Image => {
            let image: HtmlImageElement = create(document, media.tag())?;
            image.set_class_name(&media.class);
            image.set_src(&media.src);
            Ok(image.into())
        }
    }
}
