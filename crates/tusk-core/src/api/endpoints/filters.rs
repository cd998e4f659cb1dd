use reqwest::Method;

use crate::api::Endpoint;
use crate::entities::Filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiltersEndpoint {
    Filters,
}

impl Endpoint for FiltersEndpoint {
    type Result = Vec<Filter>;

    fn path_components_in_context(&self) -> Vec<String> {
        vec!["filters".into()]
    }

    fn method(&self) -> Method {
        Method::GET
    }
}
