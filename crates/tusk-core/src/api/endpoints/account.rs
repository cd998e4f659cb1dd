use reqwest::Method;

use crate::api::Endpoint;
use crate::entities::Account;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountEndpoint {
    VerifyCredentials,
    Account { id: String },
}

impl Endpoint for AccountEndpoint {
    type Result = Account;

    fn context(&self) -> Vec<String> {
        vec!["api".into(), "v1".into(), "accounts".into()]
    }

    fn path_components_in_context(&self) -> Vec<String> {
        match self {
            AccountEndpoint::VerifyCredentials => vec!["verify_credentials".into()],
            AccountEndpoint::Account { id } => vec![id.clone()],
        }
    }

    fn method(&self) -> Method {
        Method::GET
    }
}
