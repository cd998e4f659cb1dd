use reqwest::Method;

use crate::api::Endpoint;
use crate::entities::Preferences;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferencesEndpoint {
    Preferences,
}

impl Endpoint for PreferencesEndpoint {
    type Result = Preferences;

    fn path_components_in_context(&self) -> Vec<String> {
        vec!["preferences".into()]
    }

    fn method(&self) -> Method {
        Method::GET
    }
}
