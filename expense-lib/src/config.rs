use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use std::{env, fs};

/// Optional route groups. Each one is enabled independently.
#[derive(Deserialize, Clone, Copy, Default, Debug, PartialEq)]
pub struct ExtensionsConfig {
    #[serde(default)]
    pub dashboard: bool,
    #[serde(default)]
    pub pie_chart: bool,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    pub honeycomb_api_key: Option<String>,
    #[serde(default)]
    pub extensions: ExtensionsConfig,
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

fn default_bind_address() -> String {
    "0.0.0.0:8000".to_owned()
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(path).context("Unable to read config file")?;
        Config::parse(config.as_str())
    }

    pub fn parse(config: &str) -> Result<Config, anyhow::Error> {
        toml::from_str(config).with_context(|| "Unable to parse config")
    }

    pub fn from_env() -> Result<Config, anyhow::Error> {
        let database_url = read_env("DATABASE_URL")?;
        let max_connections =
            parse_optional_env("MAX_CONNECTIONS")?.unwrap_or_else(default_max_connections);
        let acquire_timeout_secs = parse_optional_env("ACQUIRE_TIMEOUT_SECS")?
            .unwrap_or_else(default_acquire_timeout_secs);
        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| default_bind_address());
        let honeycomb_api_key = env::var("HONEYCOMB_API_KEY").ok();
        let extensions = ExtensionsConfig {
            dashboard: parse_optional_env("DASHBOARD_ENABLED")?.unwrap_or(false),
            pie_chart: parse_optional_env("PIE_CHART_ENABLED")?.unwrap_or(false),
        };

        let config = Config {
            database_url,
            max_connections,
            acquire_timeout_secs,
            bind_address,
            honeycomb_api_key,
            extensions,
        };
        Ok(config)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

fn read_env(key: &str) -> Result<String, anyhow::Error> {
    env::var(key).with_context(|| format!("Unable to read env var: {}", key))
}

fn parse_optional_env<T>(key: &str) -> Result<Option<T>, anyhow::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map(Some)
            .with_context(|| format!("Unable to parse {} value", key)),
        Err(_) => Ok(None),
    }
}
