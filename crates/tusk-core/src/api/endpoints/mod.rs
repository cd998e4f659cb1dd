mod account;
mod custom_emoji;
mod filters;
mod instance;
mod lists;
mod preferences;
mod statuses;

pub use account::AccountEndpoint;
pub use custom_emoji::CustomEmojiEndpoint;
pub use filters::FiltersEndpoint;
pub use instance::InstanceEndpoint;
pub use lists::ListsEndpoint;
pub use preferences::PreferencesEndpoint;
pub use statuses::{StatusesEndpoint, Timeline, TimelineParseError};
