/*
[INPUT]:  Client configuration (market base URL, credentials, timeout) and collaborators
[OUTPUT]: FybClient whose `dispatch` throttles, builds, signs and executes requests
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::Method;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::http::{
    Clock, Form, FybError, NoopObserver, RateLimiter, ReqwestTransport, RequestBuilder,
    RequestObserver, Result, SystemClock, TimedExecutor, Transport,
};

/// FYB-SG endpoint
pub const SGD_BASE_URL: &str = "https://fybsg.com/api/SGD";
/// FYB-SE endpoint
pub const SEK_BASE_URL: &str = "https://fybse.se/api/SEK";
/// Sandbox endpoint mirroring the SGD market
pub const TEST_BASE_URL: &str = "https://private-a9161-fyb.apiary-proxy.com/api/SGD";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Target market
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Market {
    Sgd,
    Sek,
    Test,
    Custom(String),
}

impl Market {
    pub fn base_url(&self) -> &str {
        match self {
            Market::Sgd => SGD_BASE_URL,
            Market::Sek => SEK_BASE_URL,
            Market::Test => TEST_BASE_URL,
            Market::Custom(url) => url,
        }
    }
}

/// HTTP client configuration
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
    #[serde(
        rename = "timeout_secs",
        default = "default_timeout",
        deserialize_with = "deserialize_secs"
    )]
    pub timeout: Duration,
}

fn default_base_url() -> String {
    SGD_BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn deserialize_secs<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_market(Market::Sgd)
    }
}

impl ClientConfig {
    /// Public-only configuration for a market
    pub fn for_market(market: Market) -> Self {
        Self {
            base_url: market.base_url().to_string(),
            api_key: String::new(),
            api_secret: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_credentials(
        mut self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        self.api_key = api_key.into();
        self.api_secret = api_secret.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| FybError::Config(format!("failed to read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| FybError::Config(format!("failed to parse {}: {e}", path.display())))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Main HTTP client for the FYB API
#[derive(Debug, Clone)]
pub struct FybClient {
    config: ClientConfig,
    requests: RequestBuilder,
    executor: TimedExecutor,
    limiter: RateLimiter,
}

impl FybClient {
    /// Create a client with its own rate limiter and a reqwest transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: ClientConfig) -> FybClientBuilder {
        FybClientBuilder {
            config,
            limiter: None,
            transport: None,
            observer: None,
            clock: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Send one request to the API and return the raw body of a 200 response.
    ///
    /// Waits for a rate-limiter permit, builds (and signs, if `auth_needed`)
    /// the request, then executes it under the configured timeout. Missing
    /// credentials are reported before a permit is taken.
    pub async fn dispatch(
        &self,
        method: Method,
        resource: &str,
        payload: Form,
        auth_needed: bool,
    ) -> Result<Bytes> {
        self.requests.ensure_credentials(auth_needed)?;
        self.limiter.acquire().await;

        let request = self.requests.build(method, resource, payload, auth_needed)?;
        debug!(method = %request.method, url = %request.url, auth_needed, "dispatching FYB request");
        self.executor.execute(&request, self.config.timeout).await
    }
}

/// Builder for [`FybClient`] with injectable collaborators
pub struct FybClientBuilder {
    config: ClientConfig,
    limiter: Option<RateLimiter>,
    transport: Option<Arc<dyn Transport>>,
    observer: Option<Arc<dyn RequestObserver>>,
    clock: Option<Arc<dyn Clock>>,
}

impl FybClientBuilder {
    /// Share a limiter with other clients using the same credentials
    pub fn rate_limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = Some(limiter);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Observe every request/response, e.g. [`crate::TracingObserver`]
    pub fn observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Result<FybClient> {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let requests = RequestBuilder::new(
            &self.config.base_url,
            &self.config.api_key,
            &self.config.api_secret,
            clock,
        )?;
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };
        let observer = self.observer.unwrap_or_else(|| Arc::new(NoopObserver));

        Ok(FybClient {
            config: self.config,
            requests,
            executor: TimedExecutor::new(transport, observer),
            limiter: self.limiter.unwrap_or_default(),
        })
    }
}
