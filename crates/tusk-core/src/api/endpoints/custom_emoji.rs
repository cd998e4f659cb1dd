use reqwest::Method;

use crate::api::Endpoint;
use crate::entities::Emoji;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomEmojiEndpoint {
    CustomEmojis,
}

impl Endpoint for CustomEmojiEndpoint {
    type Result = Vec<Emoji>;

    fn path_components_in_context(&self) -> Vec<String> {
        vec!["custom_emojis".into()]
    }

    fn method(&self) -> Method {
        Method::GET
    }
}
