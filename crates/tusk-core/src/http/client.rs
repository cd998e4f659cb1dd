use reqwest::header::{AsHeaderName, HeaderMap};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::{HttpError, Target};

/// A fully buffered response. Holding the whole body lets several consumers
/// (body decoding, header inspection) read the same exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl HttpResponse {
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_str(&self.body).map_err(HttpError::Decode)
    }

    /// Header value as text. Values that are not visible ASCII yield `None`.
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
}

impl HttpClient {
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    pub fn inner(&self) -> &Client {
        &self.http
    }

    /// Sends the target exactly once and buffers the response. Non-2xx
    /// statuses become [`HttpError::InvalidStatusCode`] carrying the raw body.
    pub async fn send<T: Target + ?Sized>(&self, target: &T) -> Result<HttpResponse, HttpError> {
        let url = target.url()?;
        let method = target.method();

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .headers(target.headers()?);
        if let Some(body) = target.json_body() {
            builder = builder.json(&body);
        }

        debug!(%method, %url, "sending request");
        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        debug!(%method, %url, %status, bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(HttpError::InvalidStatusCode { status, body });
        }

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    pub async fn request<T, D>(&self, target: &T) -> Result<D, HttpError>
    where
        T: Target + ?Sized,
        D: DeserializeOwned,
    {
        self.send(target).await?.decode()
    }
}
