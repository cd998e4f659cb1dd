use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use url::Url;

use crate::api::Endpoint;
use crate::http::{HttpError, Target};

/// An endpoint resolved against an instance, with the credential captured at
/// the moment the target was built.
#[derive(Debug, Clone)]
pub struct MastodonApiTarget<'a, E> {
    base_url: &'a Url,
    endpoint: &'a E,
    access_token: Option<String>,
}

impl<'a, E: Endpoint> MastodonApiTarget<'a, E> {
    pub fn new(base_url: &'a Url, endpoint: &'a E, access_token: Option<String>) -> Self {
        Self {
            base_url,
            endpoint,
            access_token,
        }
    }
}

impl<E: Endpoint> Target for MastodonApiTarget<'_, E> {
    fn base_url(&self) -> &Url {
        self.base_url
    }

    fn path_components(&self) -> Vec<String> {
        self.endpoint.path_components()
    }

    fn method(&self) -> Method {
        self.endpoint.method()
    }

    fn query_parameters(&self) -> Vec<(String, String)> {
        self.endpoint.query_parameters()
    }

    fn json_body(&self) -> Option<serde_json::Value> {
        self.endpoint.json_body()
    }

    /// Fails when the configured token cannot be sent as a header value.
    fn headers(&self) -> Result<HeaderMap, HttpError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.access_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}
