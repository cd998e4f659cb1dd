use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FilterContext {
    Home,
    Notifications,
    Public,
    Thread,
    Account,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Filter {
    pub id: String,
    pub phrase: String,
    #[serde(default)]
    pub context: Vec<FilterContext>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub irreversible: bool,
    #[serde(default)]
    pub whole_word: bool,
}

impl Filter {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_none_or(|expires_at| expires_at > now)
    }

    pub fn applies_to(&self, context: FilterContext) -> bool {
        self.context.contains(&context)
    }
}
