use std::fmt;
use std::str::FromStr;

use reqwest::Method;
use thiserror::Error;

use crate::api::Endpoint;
use crate::entities::Status;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Timeline {
    Home,
    Local,
    Federated,
    List(String),
    Tag(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown timeline {0:?}; expected home, local, federated, list:<id> or tag:<name>")]
pub struct TimelineParseError(pub String);

impl FromStr for Timeline {
    type Err = TimelineParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "home" => Ok(Timeline::Home),
            "local" => Ok(Timeline::Local),
            "federated" => Ok(Timeline::Federated),
            other => match other.split_once(':') {
                Some(("list", id)) if !id.is_empty() => Ok(Timeline::List(id.to_string())),
                Some(("tag", tag)) if !tag.is_empty() => {
                    Ok(Timeline::Tag(tag.trim_start_matches('#').to_string()))
                }
                _ => Err(TimelineParseError(input.to_string())),
            },
        }
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeline::Home => write!(f, "home"),
            Timeline::Local => write!(f, "local"),
            Timeline::Federated => write!(f, "federated"),
            Timeline::List(id) => write!(f, "list:{id}"),
            Timeline::Tag(tag) => write!(f, "tag:{tag}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusesEndpoint {
    Timeline(Timeline),
}

impl Endpoint for StatusesEndpoint {
    type Result = Vec<Status>;

    fn context(&self) -> Vec<String> {
        vec!["api".into(), "v1".into(), "timelines".into()]
    }

    fn path_components_in_context(&self) -> Vec<String> {
        match self {
            StatusesEndpoint::Timeline(Timeline::Home) => vec!["home".into()],
            StatusesEndpoint::Timeline(Timeline::Local | Timeline::Federated) => {
                vec!["public".into()]
            }
            StatusesEndpoint::Timeline(Timeline::List(id)) => vec!["list".into(), id.clone()],
            StatusesEndpoint::Timeline(Timeline::Tag(tag)) => vec!["tag".into(), tag.clone()],
        }
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn query_parameters(&self) -> Vec<(String, String)> {
        match self {
            StatusesEndpoint::Timeline(Timeline::Local) => {
                vec![("local".into(), "true".into())]
            }
            _ => Vec::new(),
        }
    }
}
