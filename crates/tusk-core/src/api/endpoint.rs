use reqwest::Method;
use serde::de::DeserializeOwned;

/// One logical Mastodon API operation and the type its response decodes to.
pub trait Endpoint {
    type Result: DeserializeOwned;

    /// Path prefix shared by a family of endpoints.
    fn context(&self) -> Vec<String> {
        vec!["api".to_string(), "v1".to_string()]
    }

    fn path_components_in_context(&self) -> Vec<String>;

    fn method(&self) -> Method;

    fn query_parameters(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn json_body(&self) -> Option<serde_json::Value> {
        None
    }

    fn path_components(&self) -> Vec<String> {
        let mut components = self.context();
        components.extend(self.path_components_in_context());
        components
    }
}
