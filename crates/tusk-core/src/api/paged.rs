use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::Endpoint;

/// Optional cursors and page size sent with a list request. Only the fields
/// that are set end up in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub max_id: Option<String>,
    pub min_id: Option<String>,
    pub since_id: Option<String>,
    pub limit: Option<u32>,
}

impl PageRequest {
    pub fn older_than(max_id: impl Into<String>) -> Self {
        Self {
            max_id: Some(max_id.into()),
            ..Self::default()
        }
    }

    pub fn newer_than(min_id: impl Into<String>) -> Self {
        Self {
            min_id: Some(min_id.into()),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn query_parameters(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(max_id) = &self.max_id {
            query.push(("max_id".to_string(), max_id.clone()));
        }
        if let Some(min_id) = &self.min_id {
            query.push(("min_id".to_string(), min_id.clone()));
        }
        if let Some(since_id) = &self.since_id {
            query.push(("since_id".to_string(), since_id.clone()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        query
    }
}

/// Decorates an endpoint with pagination parameters. The wrapped endpoint is
/// only borrowed, so the caller's value is left as it was.
#[derive(Debug, Clone)]
pub struct Paged<'a, E> {
    endpoint: &'a E,
    page: PageRequest,
}

impl<'a, E: Endpoint> Paged<'a, E> {
    pub fn new(endpoint: &'a E, page: PageRequest) -> Self {
        Self { endpoint, page }
    }

    pub fn page(&self) -> &PageRequest {
        &self.page
    }
}

impl<E: Endpoint> Endpoint for Paged<'_, E> {
    type Result = E::Result;

    fn context(&self) -> Vec<String> {
        self.endpoint.context()
    }

    fn path_components_in_context(&self) -> Vec<String> {
        self.endpoint.path_components_in_context()
    }

    fn method(&self) -> Method {
        self.endpoint.method()
    }

    fn query_parameters(&self) -> Vec<(String, String)> {
        let mut query = self.endpoint.query_parameters();
        query.extend(self.page.query_parameters());
        query
    }

    fn json_body(&self) -> Option<serde_json::Value> {
        self.endpoint.json_body()
    }
}

/// Cursors recovered from a response's `Link` header. A missing field means
/// there is no further page in that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub max_id: Option<String>,
    pub min_id: Option<String>,
    pub since_id: Option<String>,
}

impl PageInfo {
    pub fn is_empty(&self) -> bool {
        self.max_id.is_none() && self.min_id.is_none() && self.since_id.is_none()
    }

    /// Cursor for the next page of older items.
    pub fn older(&self) -> Option<&str> {
        self.max_id.as_deref()
    }

    /// Cursor for the next page of newer items.
    pub fn newer(&self) -> Option<&str> {
        self.min_id.as_deref().or(self.since_id.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedResult<T> {
    pub result: T,
    pub info: PageInfo,
}
