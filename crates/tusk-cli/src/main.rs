use std::env;
use std::error::Error;
use std::io::{self, Write};

use futures::StreamExt;
use tracing::{info, warn};
use tusk_core::api::{StatusesEndpoint, Timeline};
use tusk_core::{Config, MastodonApiClient, PageDirection, PageInfo, PageRequest, init_telemetry};

type AnyError = Box<dyn Error + Send + Sync>;

const DEFAULT_PAGES: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    timeline: Timeline,
    pages: usize,
    start: PageRequest,
}

impl Options {
    fn from_env() -> Result<Self, AnyError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AnyError> {
        let timeline = match lookup("TUSK_TIMELINE") {
            Some(value) if !value.trim().is_empty() => value.parse::<Timeline>()?,
            _ => Timeline::Home,
        };

        let pages = match lookup("TUSK_PAGES") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|err| format!("invalid TUSK_PAGES {value:?}: {err}"))?,
            None => DEFAULT_PAGES,
        };
        if pages == 0 {
            return Err("TUSK_PAGES must be at least 1".into());
        }

        let mut start = PageRequest {
            max_id: lookup("TUSK_MAX_ID").filter(|id| !id.is_empty()),
            ..PageRequest::default()
        };
        if let Some(limit) = lookup("TUSK_LIMIT") {
            let limit = limit
                .trim()
                .parse::<u32>()
                .map_err(|err| format!("invalid TUSK_LIMIT {limit:?}: {err}"))?;
            start = start.with_limit(limit);
        }

        Ok(Self {
            timeline,
            pages,
            start,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let config = Config::load(&config_path)?;

    init_telemetry(&config.app, &config.telemetry)?;

    let options = Options::from_env()?;
    let client = config.api_client()?;
    if client.access_token().await.is_none() && options.timeline == Timeline::Home {
        warn!("no access token configured; the home timeline requires one");
    }

    let stdout = io::stdout();
    let info = print_timeline(&client, &options, &mut stdout.lock()).await?;

    match info.older() {
        Some(cursor) => eprintln!("next older page: TUSK_MAX_ID={cursor}"),
        None => eprintln!("no older pages"),
    }

    Ok(())
}

/// Writes every status of up to `options.pages` pages as one JSON line each and
/// returns the cursors of the last page fetched.
async fn print_timeline(
    client: &MastodonApiClient,
    options: &Options,
    out: &mut impl Write,
) -> Result<PageInfo, AnyError> {
    let endpoint = StatusesEndpoint::Timeline(options.timeline.clone());
    let mut pages = Box::pin(
        client
            .pages(&endpoint, options.start.clone(), PageDirection::Older)
            .take(options.pages),
    );

    let mut last = PageInfo::default();
    while let Some(page) = pages.next().await {
        let page = page?;
        info!(
            timeline = %options.timeline,
            statuses = page.result.len(),
            max_id = page.info.max_id.as_deref(),
            "fetched timeline page"
        );
        for status in &page.result {
            serde_json::to_writer(&mut *out, status)?;
            out.write_all(b"\n")?;
        }
        last = page.info;
    }

    Ok(last)
}
