use serde::Deserialize;
use std::{env, path::Path, path::PathBuf, time::Duration};
use thiserror::Error;
use url::Url;

use crate::api::{InstanceUrlError, MastodonApiClient, parse_instance_url};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    pub app: AppConfig,
    pub instance: InstanceConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    pub service_name: String,
    pub env: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InstanceConfig {
    pub url: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub access_token_file: Option<PathBuf>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("tusk/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TelemetryConfig {
    pub level: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    ConfigBuild(config::ConfigError),
    #[error("failed to parse configuration: {0}")]
    Deserialize(config::ConfigError),
    #[error("missing required environment variable {0}")]
    MissingEnvVar(String),
    #[error("invalid instance url: {0}")]
    InstanceUrl(#[from] InstanceUrlError),
    #[error("failed to read access token file {path}: {source}")]
    AccessTokenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build http client: {0}")]
    HttpClient(reqwest::Error),
}

impl Config {
    /// Load configuration from the provided path, apply environment overrides,
    /// resolve any `env:` indirections and read the access token file if one
    /// is configured.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()
            .map_err(ConfigError::ConfigBuild)?;

        let mut cfg: Config = raw.try_deserialize().map_err(ConfigError::Deserialize)?;
        cfg.apply_env_overrides();
        cfg.resolve_env_markers()?;
        cfg.expand_paths();
        cfg.load_access_token_file()?;
        cfg.instance_url()?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var("TUSK_INSTANCE_URL") {
            self.instance.url = url;
        }

        if let Ok(token) = env::var("TUSK_ACCESS_TOKEN") {
            self.instance.access_token = Some(token);
        }
    }

    fn resolve_env_markers(&mut self) -> Result<(), ConfigError> {
        apply_env_marker(&mut self.app.service_name)?;
        apply_env_marker(&mut self.app.env)?;
        apply_env_marker(&mut self.instance.url)?;
        if let Some(token) = &mut self.instance.access_token {
            apply_env_marker(token)?;
        }
        if let Some(level) = &mut self.telemetry.level {
            apply_env_marker(level)?;
        }
        Ok(())
    }

    fn expand_paths(&mut self) {
        if let Some(path) = &mut self.instance.access_token_file {
            let raw = path.to_string_lossy().to_string();
            *path = PathBuf::from(shellexpand::tilde(&raw).as_ref());
        }
    }

    // An explicit token wins over the file.
    fn load_access_token_file(&mut self) -> Result<(), ConfigError> {
        if self.instance.access_token.is_some() {
            return Ok(());
        }

        if let Some(path) = &self.instance.access_token_file {
            let contents =
                std::fs::read_to_string(path).map_err(|source| ConfigError::AccessTokenFile {
                    path: path.clone(),
                    source,
                })?;
            let token = contents.trim();
            if !token.is_empty() {
                self.instance.access_token = Some(token.to_string());
            }
        }

        Ok(())
    }

    pub fn instance_url(&self) -> Result<Url, ConfigError> {
        Ok(parse_instance_url(&self.instance.url)?)
    }

    pub fn http_client(&self) -> Result<reqwest::Client, ConfigError> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.instance.timeout_secs))
            .user_agent(self.instance.user_agent.clone())
            .build()
            .map_err(ConfigError::HttpClient)
    }

    pub fn api_client(&self) -> Result<MastodonApiClient, ConfigError> {
        let client = MastodonApiClient::new(self.http_client()?, self.instance_url()?);
        Ok(match &self.instance.access_token {
            Some(token) => client.with_access_token(token.clone()),
            None => client,
        })
    }
}

fn apply_env_marker(value: &mut String) -> Result<(), ConfigError> {
    if let Some(rest) = value.strip_prefix("env:") {
        let resolved = env::var(rest).map_err(|_| ConfigError::MissingEnvVar(rest.to_string()))?;
        *value = resolved;
    }
    Ok(())
}
