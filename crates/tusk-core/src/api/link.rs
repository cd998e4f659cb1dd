use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use reqwest::header::{HeaderMap, LINK};
use tracing::debug;
use url::Url;

use crate::api::PageInfo;

// Either a whole `<...>` entry, or a bare URL with an optional scheme. Bare
// URLs without a scheme need a dotted host followed by a path.
static LINK_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<(?P<bracketed>[^<>]*)>|(?i)\b(?:https?://|[a-z0-9-]+(?:\.[a-z0-9-]+)+/)[^\s<>",;]*"#,
    )
    .expect("link url pattern compiles")
});

/// Reads pagination cursors from every `Link` header on a response. Missing or
/// unreadable headers produce an empty [`PageInfo`].
pub fn page_info_from_headers(headers: &HeaderMap) -> PageInfo {
    let values: Vec<&str> = headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| match value.to_str() {
            Ok(text) => Some(text),
            Err(err) => {
                debug!(error = %err, "ignoring unreadable Link header");
                None
            }
        })
        .collect();

    if values.is_empty() {
        return PageInfo::default();
    }

    page_info_from_link(&values.join(", "))
}

/// Extracts `max_id`, `min_id` and `since_id` from the URLs in a `Link` header
/// value. Query pairs of all URLs are scanned in order and the first
/// occurrence of each name wins. Values are only `%XX`-decoded.
pub fn page_info_from_link(links: &str) -> PageInfo {
    let pairs: Vec<(String, String)> = LINK_URL
        .captures_iter(links)
        .filter_map(|found| {
            let text = found
                .name("bracketed")
                .or_else(|| found.get(0))?
                .as_str()
                .trim();
            match parse_link_url(text) {
                Ok(url) => Some(url),
                Err(err) => {
                    debug!(url = text, error = %err, "skipping malformed Link url");
                    None
                }
            }
        })
        .flat_map(|url| query_pairs(&url))
        .collect();

    let first = |name: &str| {
        pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    };

    PageInfo {
        max_id: first("max_id"),
        min_id: first("min_id"),
        since_id: first("since_id"),
    }
}

fn parse_link_url(text: &str) -> Result<Url, url::ParseError> {
    if text.contains("://") {
        Url::parse(text)
    } else {
        Url::parse(&format!("https://{text}"))
    }
}

// Unlike `Url::query_pairs`, `+` stays a literal plus.
fn query_pairs(url: &Url) -> Vec<(String, String)> {
    let Some(query) = url.query() else {
        return Vec::new();
    };

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (
                percent_decode_str(key).decode_utf8_lossy().into_owned(),
                percent_decode_str(value).decode_utf8_lossy().into_owned(),
            )
        })
        .collect()
}
