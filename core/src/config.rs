use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fallback::FALLBACK_TARGET_DEFAULT;

pub const CONFIG_ELEMENT_ID: &str = "gallery-config";
pub const BOUND_MARKER_ATTRIBUTE: &str = "data-preview-bound";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    pub overlay_id: String,
    pub thumbnail_selector: String,
    pub full_attribute: String,
    pub kind_attribute: String,
    pub clickable_class: String,
    pub box_class: String,
    pub content_class: String,
    pub close_class: String,
    pub close_label: String,
    pub shown_display: String,
    pub close_key: String,
    pub backdrop_closes: bool,
    pub bind_error_listeners: bool,
    pub infer_kind_from_extension: bool,
    pub fallback_target: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            overlay_id: "preview".to_string(),
            thumbnail_selector: "img[data-full]".to_string(),
            full_attribute: "data-full".to_string(),
            kind_attribute: "data-type".to_string(),
            clickable_class: "clickable".to_string(),
            box_class: "preview-box".to_string(),
            content_class: "preview-content".to_string(),
            close_class: "close-btn".to_string(),
            close_label: "X".to_string(),
            shown_display: "flex".to_string(),
            close_key: "Escape".to_string(),
            backdrop_closes: true,
            bind_error_listeners: true,
            infer_kind_from_extension: false,
            fallback_target: FALLBACK_TARGET_DEFAULT.to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let config: GalleryConfig =
            serde_json::from_str(trimmed).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("overlayId", &self.overlay_id),
            ("thumbnailSelector", &self.thumbnail_selector),
            ("fullAttribute", &self.full_attribute),
            ("kindAttribute", &self.kind_attribute),
            ("clickableClass", &self.clickable_class),
            ("closeKey", &self.close_key),
            ("shownDisplay", &self.shown_display),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
        }
        if self.shown_display.trim().eq_ignore_ascii_case("none") {
            return Err(ConfigError::HiddenWhenShown);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    EmptyField { field: &'static str },
    HiddenWhenShown,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "invalid gallery config: {message}"),
            ConfigError::EmptyField { field } => write!(f, "gallery config field {field} is empty"),
            ConfigError::HiddenWhenShown => {
                write!(f, "gallery config shownDisplay cannot be none")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
