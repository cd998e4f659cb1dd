use serde::{Deserialize, Serialize};

use crate::entities::Visibility;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpandMedia {
    #[default]
    Default,
    ShowAll,
    HideAll,
}

/// Server-side posting and reading preferences of the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    #[serde(rename = "posting:default:visibility")]
    pub posting_default_visibility: Visibility,
    #[serde(rename = "posting:default:sensitive", default)]
    pub posting_default_sensitive: bool,
    #[serde(rename = "posting:default:language", default)]
    pub posting_default_language: Option<String>,
    #[serde(rename = "reading:expand:media", default)]
    pub reading_expand_media: ExpandMedia,
    #[serde(rename = "reading:expand:spoilers", default)]
    pub reading_expand_spoilers: bool,
}
