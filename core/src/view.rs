use crate::config::GalleryConfig;
use crate::media::MediaKind;
use crate::overlay::OverlayState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaElement {
    pub kind: MediaKind,
    pub src: String,
    pub class: String,
    pub controls: bool,
    pub autoplay: bool,
}

impl MediaElement {
    pub fn tag(&self) -> &'static str {
        match self.kind {
            MediaKind::Image => "img",
            MediaKind::Video => "video",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloseButton {
    pub class: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewContent {
    pub box_class: String,
    pub media: MediaElement,
    pub close: CloseButton,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayView {
    Hidden,
    Shown {
        display: String,
        content: PreviewContent,
    },
}

impl OverlayView {
    pub fn project(state: &OverlayState, config: &GalleryConfig) -> Self {
        let Some(media) = state.media() else {
            return OverlayView::Hidden;
        };
        let is_video = media.kind.is_video();
        OverlayView::Shown {
            display: config.shown_display.clone(),
            content: PreviewContent {
                box_class: config.box_class.clone(),
                media: MediaElement {
                    kind: media.kind,
                    src: media.src.clone(),
                    class: config.content_class.clone(),
                    controls: is_video,
                    autoplay: is_video,
                },
                close: CloseButton {
                    class: config.close_class.clone(),
                    label: config.close_label.clone(),
                },
            },
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, OverlayView::Shown { .. })
    }

    /// Inline `display` value for the overlay container.
    pub fn display(&self) -> &str {
        match self {
            OverlayView::Hidden => "none",
            OverlayView::Shown { display, .. } => display,
        }
    }
}
