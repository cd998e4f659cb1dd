use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::de::null_as_default;
use crate::entities::{Account, Emoji};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Unlisted,
    Private,
    Direct,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentType {
    Image,
    Gifv,
    Video,
    Audio,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AttachmentType,
    pub url: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Status {
    pub id: String,
    pub uri: String,
    #[serde(default)]
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub account: Account,
    #[serde(default)]
    pub content: String,
    pub visibility: Visibility,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub spoiler_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_attachments: Vec<Attachment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emojis: Vec<Emoji>,
    #[serde(default)]
    pub reblogs_count: u64,
    #[serde(default)]
    pub favourites_count: u64,
    #[serde(default)]
    pub replies_count: u64,
    #[serde(default)]
    pub in_reply_to_id: Option<String>,
    #[serde(default)]
    pub reblog: Option<Box<Status>>,
}

impl Status {
    /// The status whose content should be shown: the boosted one for reblogs.
    pub fn displayed(&self) -> &Status {
        self.reblog.as_deref().unwrap_or(self)
    }
}
