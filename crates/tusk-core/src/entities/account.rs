use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::de::{null_as_default, optional_date_or_datetime};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Emoji {
    pub shortcode: String,
    pub url: String,
    pub static_url: String,
    #[serde(default = "default_true")]
    pub visible_in_picker: bool,
    #[serde(default)]
    pub category: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub acct: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub bot: bool,
    pub url: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub statuses_count: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "optional_date_or_datetime")]
    pub last_status_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emojis: Vec<Emoji>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<Field>,
}

impl Account {
    /// `@user@host` form of the account, resolving local accounts against the
    /// instance they were fetched from.
    pub fn handle(&self, instance_host: &str) -> String {
        if self.acct.contains('@') {
            format!("@{}", self.acct)
        } else {
            format!("@{}@{}", self.acct, instance_host)
        }
    }
}
