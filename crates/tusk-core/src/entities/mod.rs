//! Decoded Mastodon API objects. Only the fields this crate reads are
//! modelled; unknown fields are ignored.

pub mod account;
pub(crate) mod de;
pub mod filter;
pub mod instance;
pub mod list;
pub mod preferences;
pub mod status;

pub use account::{Account, Emoji, Field};
pub use filter::{Filter, FilterContext};
pub use instance::{Instance, InstanceStats, InstanceUrls};
pub use list::List;
pub use preferences::{ExpandMedia, Preferences};
pub use status::{Attachment, AttachmentType, Status, Visibility};
