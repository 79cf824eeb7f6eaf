use crate::error::{DeckError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2/pokemon";
const DEFAULT_CONCURRENCY: usize = 4;

/// Keys accepted by [`DeckConfig::get`] and [`DeckConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["api-url", "concurrency", "timeout"];

/// Configuration for pokedeck, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckConfig {
    /// Base URL of the lookup service; records live at `{api_url}/{id}`
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Maximum lookups in flight during one refresh
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Per-request timeout in seconds, `None` waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            concurrency: DEFAULT_CONCURRENCY,
            timeout_secs: None,
        }
    }
}

impl DeckConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DeckError::Io)?;
        let config: DeckConfig =
            serde_json::from_str(&content).map_err(DeckError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DeckError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DeckError::Serialization)?;
        fs::write(config_path, content).map_err(DeckError::Io)?;
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api-url" => Some(self.api_url.clone()),
            "concurrency" => Some(self.concurrency.to_string()),
            "timeout" => Some(
                self.timeout_secs
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api-url" => {
                let url = value.trim().trim_end_matches('/');
                let usable = reqwest::Url::parse(url)
                    .map(|u| matches!(u.scheme(), "http" | "https") && !u.cannot_be_a_base())
                    .unwrap_or(false);
                if !usable {
                    return Err(DeckError::Config(format!(
                        "api-url must start with http:// or https://, got {}",
                        value
                    )));
                }
                self.api_url = url.to_string();
            }
            "concurrency" => {
                let n: usize = value
                    .trim()
                    .parse()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| {
                        DeckError::Config(format!(
                            "concurrency must be a positive integer, got {}",
                            value
                        ))
                    })?;
                self.concurrency = n;
            }
            "timeout" => {
                self.timeout_secs = match value.trim() {
                    "none" | "0" => None,
                    other => Some(other.parse().map_err(|_| {
                        DeckError::Config(format!(
                            "timeout must be a number of seconds or 'none', got {}",
                            value
                        ))
                    })?),
                };
            }
            _ => return Err(DeckError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}
