/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials, simulation/caching defaults)
[OUTPUT]: Configured client holding the reqwest client and response cache
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::cache::{CacheKey, EvictionPolicy, ResponseCache};
use crate::http::Result;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;
use tokio::sync::Mutex;

/// Base URL for the Bittrex v1.1 API
pub const DEFAULT_BASE_URL: &str = "https://bittrex.com/api/v1.1";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Default for trading accessors: `true` means dry run, nothing is sent
    pub simulation: bool,
    /// Default for read accessors: serve repeated calls from the cache
    pub cached: bool,
    /// Sign market/account requests when credentials are set
    pub sign_requests: bool,
    /// Bound on cached responses; `None` keeps everything
    pub cache_capacity: Option<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            simulation: false,
            cached: false,
            sign_requests: true,
            cache_capacity: None,
        }
    }
}

/// API key pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the Bittrex API
#[derive(Debug)]
pub struct BittrexClient {
    pub(crate) http_client: Client,
    pub(crate) base_url: Url,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) simulation: bool,
    pub(crate) cached: bool,
    pub(crate) sign_requests: bool,
    pub(crate) cache: Mutex<ResponseCache>,
}

impl BittrexClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a client against a different API root (mock servers, proxies)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            credentials: None,
            simulation: config.simulation,
            cached: config.cached,
            sign_requests: config.sign_requests,
            cache: Mutex::new(ResponseCache::with_capacity_limit(config.cache_capacity)),
        })
    }

    /// Create a client from a key pair and the two per-call defaults
    pub fn with_credentials(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        simulation: bool,
        cached: bool,
    ) -> Result<Self> {
        let mut client = Self::with_config(ClientConfig {
            simulation,
            cached,
            ..ClientConfig::default()
        })?;
        client.set_credentials(Credentials::new(api_key, api_secret));
        Ok(client)
    }

    /// Replace the cache eviction strategy, dropping anything cached so far
    pub fn with_eviction_policy(self, policy: Box<dyn EvictionPolicy>) -> Self {
        Self {
            cache: Mutex::new(ResponseCache::with_policy(policy)),
            ..self
        }
    }

    /// Set credentials for market and account requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Default for trading accessors called with `simulated: None`
    pub fn simulation(&self) -> bool {
        self.simulation
    }

    pub fn set_simulation(&mut self, simulation: bool) {
        self.simulation = simulation;
    }

    /// Default for read accessors called with `cached: None`
    pub fn cached(&self) -> bool {
        self.cached
    }

    pub fn set_cached(&mut self, cached: bool) {
        self.cached = cached;
    }

    /// Number of responses currently cached
    pub async fn cache_len(&self) -> usize {
        self.cache.lock().await.len()
    }

    /// Drop every cached response
    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }

    /// Drop the cached response for one call, returning it
    pub async fn invalidate(&self, key: &CacheKey) -> Option<Value> {
        self.cache.lock().await.remove(key)
    }

    /// Peek at a cached response without touching the network
    pub async fn cached_value(&self, key: &CacheKey) -> Option<Value> {
        self.cache.lock().await.get(key).cloned()
    }
}
