use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use gallery_preview_core::{
    CloseReason, GalleryConfig, MediaRef, OverlayAction, OverlayState, OverlayView, Transition,
};

use crate::dom::{html_element_by_id, js_error_message};
use crate::render::render_overlay;
use crate::thumbnails::ThumbnailBinding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    MissingDocument,
    MissingOverlay { id: String },
    Dom(String),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::MissingDocument => write!(f, "no document to mount the gallery on"),
            MountError::MissingOverlay { id } => write!(f, "overlay container #{id} not found"),
            MountError::Dom(message) => write!(f, "gallery dom setup failed: {message}"),
        }
    }
}

impl std::error::Error for MountError {}

impl From<JsValue> for MountError {
    fn from(error: JsValue) -> Self {
        MountError::Dom(js_error_message(&error))
    }
}

/// Owns the preview overlay: its state, the container it renders into and
/// every listener attached on its behalf.
#[derive(Clone)]
pub struct OverlayController {
    inner: Rc<OverlayInner>,
}

pub(crate) type WeakController = Weak<OverlayInner>;

pub(crate) struct OverlayInner {
    config: GalleryConfig,
    document: Document,
    container: HtmlElement,
    state: RefCell<OverlayState>,
    content_listeners: RefCell<Vec<EventListener>>,
    // Listeners of the previous render. One of them may be the handler that
    // triggered the current transition, so they outlive it by one render.
    retired_listeners: RefCell<Vec<EventListener>>,
    global_listeners: RefCell<Vec<EventListener>>,
    thumbnails: RefCell<Vec<ThumbnailBinding>>,
    // Binding of the last thumbnail swapped for a fallback link. Its error
    // listener is usually the caller, so it is dropped on the next swap.
    retired_thumbnail: RefCell<Option<ThumbnailBinding>>,
}

impl OverlayController {
    pub fn mount(config: GalleryConfig, document: &Document) -> Result<Self, MountError> {
        let container = html_element_by_id(document, &config.overlay_id).ok_or_else(|| {
            MountError::MissingOverlay {
                id: config.overlay_id.clone(),
            }
        })?;
        let controller = Self {
            inner: Rc::new(OverlayInner {
                config,
                document: document.clone(),
                container,
                state: RefCell::new(OverlayState::Closed),
                content_listeners: RefCell::new(Vec::new()),
                retired_listeners: RefCell::new(Vec::new()),
                global_listeners: RefCell::new(Vec::new()),
                thumbnails: RefCell::new(Vec::new()),
                retired_thumbnail: RefCell::new(None),
            }),
        };
        controller.render()?;
        controller.attach_global_listeners();
        Ok(controller)
    }

    pub(crate) fn downgrade(&self) -> WeakController {
        Rc::downgrade(&self.inner)
    }

    pub(crate) fn upgrade(weak: &WeakController) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.inner.config
    }

    pub fn document(&self) -> &Document {
        &self.inner.document
    }

    pub fn container(&self) -> &HtmlElement {
        &self.inner.container
    }

    pub fn state(&self) -> OverlayState {
        self.inner.state.borrow().clone()
    }

    pub fn is_open(&self) -> bool {
        self.inner.state.borrow().is_open()
    }

    pub fn open(&self, media: MediaRef) -> Transition {
        self.dispatch(OverlayAction::Open(media))
    }

    pub fn close(&self, reason: CloseReason) -> Transition {
        self.dispatch(OverlayAction::Close(reason))
    }

    pub fn dispatch(&self, action: OverlayAction) -> Transition {
        let transition = self.inner.state.borrow_mut().apply(action);
        if transition.needs_render() {
            if let Err(err) = self.render() {
                console::warn!("preview: render failed", err.to_string());
            }
        }
        transition
    }

    /// Closes the overlay, detaches every listener and unmarks the bound
    /// thumbnails so a later mount can bind them again.
    pub fn teardown(&self) {
        self.close(CloseReason::Teardown);
        self.inner.global_listeners.borrow_mut().clear();
        self.inner.content_listeners.borrow_mut().clear();
        self.inner.retired_listeners.borrow_mut().clear();
        self.inner.retired_thumbnail.borrow_mut().take();
        let bindings = std::mem::take(&mut *self.inner.thumbnails.borrow_mut());
        for binding in bindings {
            binding.release(&self.inner.config);
        }
    }

    pub(crate) fn adopt_thumbnails(&self, bindings: Vec<ThumbnailBinding>) {
        self.inner.thumbnails.borrow_mut().extend(bindings);
    }

    /// Forgets the binding of a thumbnail that left the page.
    pub(crate) fn retire_thumbnail(&self, element: &Element) {
        let binding = {
            let mut thumbnails = self.inner.thumbnails.borrow_mut();
            let Some(index) = thumbnails.iter().position(|binding| binding.is_for(element)) else {
                return;
            };
            thumbnails.swap_remove(index)
        };
        *self.inner.retired_thumbnail.borrow_mut() = Some(binding);
    }

    pub fn bound_thumbnail_count(&self) -> usize {
        self.inner.thumbnails.borrow().len()
    }

    fn render(&self) -> Result<(), MountError> {
        let view = OverlayView::project(&self.inner.state.borrow(), &self.inner.config);
        let weak = self.downgrade();
        let on_close: Rc<dyn Fn()> = Rc::new(move || {
            if let Some(controller) = OverlayController::upgrade(&weak) {
                controller.close(CloseReason::Button);
            }
        });
        let rendered = render_overlay(&self.inner.document, &self.inner.container, &view, on_close);
        let listeners = match rendered {
            Ok(listeners) => listeners,
            Err(err) => {
                self.retire_content_listeners(Vec::new());
                return Err(err.into());
            }
        };
        self.retire_content_listeners(listeners);
        Ok(())
    }

    fn retire_content_listeners(&self, next: Vec<EventListener>) {
        let previous = self.inner.content_listeners.replace(next);
        *self.inner.retired_listeners.borrow_mut() = previous;
    }

    fn attach_global_listeners(&self) {
        let mut listeners = Vec::new();

        let weak = self.downgrade();
        let close_key = self.inner.config.close_key.clone();
        listeners.push(EventListener::new(
            &self.inner.document,
            "keydown",
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.key() != close_key {
                    return;
                }
                if let Some(controller) = OverlayController::upgrade(&weak) {
                    controller.close(CloseReason::Escape);
                }
            },
        ));

        if self.inner.config.backdrop_closes {
            let weak = self.downgrade();
            let container: JsValue = self.inner.container.clone().into();
            listeners.push(EventListener::new(
                &self.inner.container,
                "click",
                move |event| {
                    let on_backdrop = event
                        .target()
                        .map(|target| JsValue::from(target) == container)
                        .unwrap_or(false);
                    if !on_backdrop {
                        return;
                    }
                    if let Some(controller) = OverlayController::upgrade(&weak) {
                        controller.close(CloseReason::Backdrop);
                    }
                },
            ));
        }

        *self.inner.global_listeners.borrow_mut() = listeners;
    }
}
