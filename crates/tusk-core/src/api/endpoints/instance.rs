use reqwest::Method;

use crate::api::Endpoint;
use crate::entities::Instance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceEndpoint {
    Instance,
}

impl Endpoint for InstanceEndpoint {
    type Result = Instance;

    fn path_components_in_context(&self) -> Vec<String> {
        vec!["instance".into()]
    }

    fn method(&self) -> Method {
        Method::GET
    }
}
