use serde::{Deserialize, Serialize};

/// Extensions the gallery serves as video.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl Default for MediaKind {
    fn default() -> Self {
        MediaKind::Image
    }
}

impl MediaKind {
    pub fn from_video_flag(is_video: bool) -> Self {
        if is_video {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    /// Exact, case-sensitive match of a kind attribute value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "video" => Some(MediaKind::Video),
            "image" => Some(MediaKind::Image),
            _ => None,
        }
    }

    pub fn from_extension(url: &str) -> Option<Self> {
        let ext = url_extension(url)?;
        if VIDEO_EXTENSIONS
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(ext))
        {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    pub fn is_video(self) -> bool {
        matches!(self, MediaKind::Video)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaRef {
    pub src: String,
    pub kind: MediaKind,
}

impl MediaRef {
    pub fn new(src: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            src: src.into(),
            kind,
        }
    }

    pub fn image(src: impl Into<String>) -> Self {
        Self::new(src, MediaKind::Image)
    }

    pub fn video(src: impl Into<String>) -> Self {
        Self::new(src, MediaKind::Video)
    }
}

/// Final path segment of a URL, ignoring any query string or fragment.
fn url_path_tail(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().unwrap_or(path)
}

fn url_extension(url: &str) -> Option<&str> {
    let tail = url_path_tail(url);
    let (stem, ext) = tail.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matches_known_kinds_exactly() {
        assert_eq!(MediaKind::parse("video"), Some(MediaKind::Video));
        assert_eq!(MediaKind::parse("image"), Some(MediaKind::Image));
        assert_eq!(MediaKind::parse("Video"), None);
        assert_eq!(MediaKind::parse(" video "), None);
        assert_eq!(MediaKind::parse("audio"), None);
        assert_eq!(MediaKind::parse(""), None);
    }

    #[test]
    fn extension_inference_only_recognizes_video_formats() {
        assert_eq!(MediaKind::from_extension("/media/clip.MP4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_extension("/media/clip.mkv?t=3"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_extension("/media/photo.jpg"), None);
        assert_eq!(MediaKind::from_extension("/media/.mp4"), None);
        assert_eq!(MediaKind::from_extension("/media/noext"), None);
    }

    #[test]
    fn path_tail_strips_query_and_fragment() {
        assert_eq!(url_path_tail("https://host/a/b.png?x=1#top"), "b.png");
        assert_eq!(url_path_tail("plain.png"), "plain.png");
        assert_eq!(url_path_tail("https://host/dir/"), "");
    }

    #[test]
    fn video_flag_maps_to_kind() {
        assert_eq!(MediaKind::from_video_flag(true), MediaKind::Video);
        assert_eq!(MediaKind::from_video_flag(false), MediaKind::Image);
        assert!(MediaKind::Video.is_video());
        assert!(!MediaKind::default().is_video());
    }
}
