pub mod api;
pub mod config;
pub mod entities;
pub mod http;
pub mod telemetry;

pub use api::{
    ApiError, ClientError, Endpoint, MastodonApiClient, PageDirection, PageInfo, PageRequest,
    PagedResult,
};
pub use config::{Config, ConfigError};
pub use telemetry::{TelemetryError, init_logging, init_telemetry};
