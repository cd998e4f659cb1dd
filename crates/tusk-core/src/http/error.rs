use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid status code {status}")]
    InvalidStatusCode { status: StatusCode, body: String },
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl HttpError {
    /// Status code of the response, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HttpError::InvalidStatusCode { status, .. } => Some(*status),
            HttpError::Transport(err) => err.status(),
            _ => None,
        }
    }
}
