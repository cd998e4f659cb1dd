use reqwest::Method;

use crate::api::Endpoint;
use crate::entities::List;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListsEndpoint {
    Lists,
}

impl Endpoint for ListsEndpoint {
    type Result = Vec<List>;

    fn path_components_in_context(&self) -> Vec<String> {
        vec!["lists".into()]
    }

    fn method(&self) -> Method {
        Method::GET
    }
}
