use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstanceUrlError {
    #[error("instance url is empty")]
    Empty,
    #[error("invalid instance url {input}: {source}")]
    Invalid {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported scheme {0}")]
    UnsupportedScheme(String),
    #[error("instance url has no host")]
    MissingHost,
}

/// Parses user input such as `mastodon.social` or `https://mastodon.social/`
/// into an instance base URL. Input without a scheme is treated as https.
pub fn parse_instance_url(input: &str) -> Result<Url, InstanceUrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InstanceUrlError::Empty);
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|source| InstanceUrlError::Invalid {
        input: trimmed.to_string(),
        source,
    })?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(InstanceUrlError::UnsupportedScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(InstanceUrlError::MissingHost);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_defaults_to_https() {
        let url = parse_instance_url("  mastodon.social ").expect("valid");
        assert_eq!(url.as_str(), "https://mastodon.social/");
    }

    #[test]
    fn explicit_scheme_is_kept() {
        let url = parse_instance_url("http://localhost:3000").expect("valid");
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.port(), Some(3000));

        let url = parse_instance_url("HTTPS://Example.Social/").expect("valid");
        assert_eq!(url.as_str(), "https://example.social/");
    }

    #[test]
    fn rejects_empty_and_foreign_schemes() {
        assert_eq!(parse_instance_url("   "), Err(InstanceUrlError::Empty));
        assert_eq!(
            parse_instance_url("ftp://example.social"),
            Err(InstanceUrlError::UnsupportedScheme("ftp".into()))
        );
    }

    #[test]
    fn rejects_unparseable_hosts() {
        let err = parse_instance_url("exa mple.social").expect_err("space in host");
        assert!(matches!(err, InstanceUrlError::Invalid { .. }));
    }
}
