pub mod client;
pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod instance_url;
pub mod link;
pub mod paged;
pub mod pager;
pub mod target;

pub use client::MastodonApiClient;
pub use endpoint::Endpoint;
pub use endpoints::{
    AccountEndpoint, CustomEmojiEndpoint, FiltersEndpoint, InstanceEndpoint, ListsEndpoint,
    PreferencesEndpoint, StatusesEndpoint, Timeline, TimelineParseError,
};
pub use error::{ApiError, ClientError};
pub use instance_url::{InstanceUrlError, parse_instance_url};
pub use link::{page_info_from_headers, page_info_from_link};
pub use paged::{PageInfo, PageRequest, Paged, PagedResult};
pub use pager::PageDirection;
pub use target::MastodonApiTarget;
