pub mod config;
pub mod descriptor;
pub mod fallback;
pub mod media;
pub mod overlay;
pub mod view;

pub use config::{ConfigError, GalleryConfig, BOUND_MARKER_ATTRIBUTE, CONFIG_ELEMENT_ID};
pub use descriptor::{DescriptorError, KindSource, ThumbnailDescriptor};
pub use fallback::{fallback_label, FallbackLink, FALLBACK_TARGET_DEFAULT};
pub use media::{MediaKind, MediaRef, VIDEO_EXTENSIONS};
pub use overlay::{CloseReason, OverlayAction, OverlayState, Transition};
pub use view::{CloseButton, MediaElement, OverlayView, PreviewContent};
