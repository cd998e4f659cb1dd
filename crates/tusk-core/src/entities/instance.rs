use serde::{Deserialize, Serialize};

use crate::entities::Account;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstanceUrls {
    #[serde(default)]
    pub streaming_api: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstanceStats {
    #[serde(default)]
    pub user_count: u64,
    #[serde(default)]
    pub status_count: u64,
    #[serde(default)]
    pub domain_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Instance {
    pub uri: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub version: String,
    #[serde(default)]
    pub urls: InstanceUrls,
    #[serde(default)]
    pub stats: InstanceStats,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub registrations: bool,
    #[serde(default)]
    pub approval_required: bool,
    #[serde(default)]
    pub max_toot_chars: Option<u32>,
    #[serde(default)]
    pub contact_account: Option<Account>,
}
