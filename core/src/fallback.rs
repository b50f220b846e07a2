pub const FALLBACK_TARGET_DEFAULT: &str = "_blank";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackLink {
    pub href: String,
    pub label: String,
    pub target: String,
}

impl FallbackLink {
    /// Link that stands in for a thumbnail whose preview image failed to load.
    /// Returns `None` only when the thumbnail has no asset url attribute at all.
    pub fn for_asset(full: Option<&str>, target: &str) -> Option<Self> {
        let href = full?;
        Some(Self {
            href: href.to_string(),
            label: fallback_label(href).to_string(),
            target: target.to_string(),
        })
    }
}

/// Display name for an asset url: everything after its last `/`. A url that
/// ends in a slash yields an empty label.
pub fn fallback_label(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
