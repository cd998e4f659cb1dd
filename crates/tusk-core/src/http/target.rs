use reqwest::Method;
use reqwest::header::HeaderMap;
use url::Url;

use crate::http::HttpError;

/// A fully described request the transport can send.
pub trait Target {
    fn base_url(&self) -> &Url;

    fn path_components(&self) -> Vec<String>;

    fn method(&self) -> Method;

    fn query_parameters(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn json_body(&self) -> Option<serde_json::Value> {
        None
    }

    fn headers(&self) -> Result<HeaderMap, HttpError> {
        Ok(HeaderMap::new())
    }

    /// Joins the base URL with the path components (each encoded as a single
    /// segment) and appends the query parameters in order.
    fn url(&self) -> Result<Url, HttpError> {
        let mut url = self.base_url().clone();
        url.path_segments_mut()
            .map_err(|_| HttpError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(self.path_components());

        let query = self.query_parameters();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }
}
