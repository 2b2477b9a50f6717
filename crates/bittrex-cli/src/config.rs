/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed client configuration and a ready BittrexClient
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use anyhow::Context;
use bittrex_adapter::{BittrexClient, ClientConfig, Credentials, http::DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Client settings loaded from YAML
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// API key; empty means public endpoints only
    #[serde(default)]
    pub api_key: String,
    /// API secret used to sign market/account requests
    #[serde(default)]
    pub api_secret: String,
    /// Dry-run trading calls unless overridden on the command line
    #[serde(default = "default_simulation")]
    pub simulation: bool,
    /// Serve repeated read calls from the cache
    #[serde(default)]
    pub cached: bool,
    /// Sign market/account requests
    #[serde(default = "default_sign_requests")]
    pub sign_requests: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Bound on cached responses; unset keeps everything
    #[serde(default)]
    pub cache_capacity: Option<usize>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            simulation: default_simulation(),
            cached: false,
            sign_requests: default_sign_requests(),
            timeout_secs: default_timeout_secs(),
            cache_capacity: None,
            base_url: default_base_url(),
        }
    }
}

fn default_simulation() -> bool {
    true
}

fn default_sign_requests() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse config yaml")?;
        Ok(config)
    }

    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            simulation: self.simulation,
            cached: self.cached,
            sign_requests: self.sign_requests,
            cache_capacity: self.cache_capacity,
            ..ClientConfig::default()
        }
    }

    pub fn build_client(&self) -> anyhow::Result<BittrexClient> {
        let mut client =
            BittrexClient::with_config_and_base_url(self.client_config(), &self.base_url)
                .context("build client")?;
        if self.has_credentials() {
            client.set_credentials(Credentials::new(&self.api_key, &self.api_secret));
        }
        Ok(client)
    }
}
