use std::fmt;

use crate::media::{MediaKind, MediaRef};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindSource {
    Attribute,
    Extension,
    Default,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThumbnailDescriptor {
    pub media: MediaRef,
    pub kind_source: KindSource,
    /// Kind attribute value that was present but not recognized.
    pub unknown_kind: Option<String>,
}

impl ThumbnailDescriptor {
    /// Builds a descriptor from raw attribute values read off a thumbnail.
    ///
    /// The full url is taken as-is, empty included. An unrecognized kind value
    /// falls back to image, the same as a missing one; the raw value is kept in
    /// `unknown_kind` so callers can report it.
    pub fn parse(
        full: Option<&str>,
        kind: Option<&str>,
        infer_from_extension: bool,
    ) -> Result<Self, DescriptorError> {
        let src = full.ok_or(DescriptorError::MissingFullUrl)?;

        let mut unknown_kind = None;
        let declared = match kind.filter(|value| !value.is_empty()) {
            Some(raw) => match MediaKind::parse(raw) {
                Some(kind) => Some(kind),
                None => {
                    unknown_kind = Some(raw.to_string());
                    None
                }
            },
            None => None,
        };

        let (kind, kind_source) = if let Some(kind) = declared {
            (kind, KindSource::Attribute)
        } else if let Some(kind) = infer_from_extension
            .then(|| MediaKind::from_extension(src))
            .flatten()
        {
            (kind, KindSource::Extension)
        } else {
            (MediaKind::Image, KindSource::Default)
        };

        Ok(Self {
            media: MediaRef::new(src, kind),
            kind_source,
            unknown_kind,
        })
    }

    pub fn src(&self) -> &str {
        &self.media.src
    }

    pub fn kind(&self) -> MediaKind {
        self.media.kind
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    MissingFullUrl,
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorError::MissingFullUrl => write!(f, "thumbnail has no full asset url"),
        }
    }
}

impl std::error::Error for DescriptorError {}
