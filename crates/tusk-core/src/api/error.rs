use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http::HttpError;

/// Error body returned by a Mastodon server alongside a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ClientError {
    /// Replaces a bad-status transport error with the server's structured
    /// error when the body has that shape. Anything else passes through.
    pub(crate) fn from_transport(err: HttpError) -> Self {
        if let HttpError::InvalidStatusCode { body, .. } = &err {
            if let Ok(api_error) = serde_json::from_str::<ApiError>(body) {
                return ClientError::Api(api_error);
            }
        }

        ClientError::Http(err)
    }
}
