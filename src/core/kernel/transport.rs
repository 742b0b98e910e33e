use crate::core::errors::PaapiError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{instrument, trace, warn};

/// Transport trait for issuing the signed GET request
///
/// This is the only place the library suspends. Implementations must return
/// the body unmodified, including for non-2xx statuses: the service reports
/// faults inside the XML body as well as via the HTTP status.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request and return the raw response body
    async fn get(&self, url: &str) -> Result<Vec<u8>, PaapiError>;
}

/// Configuration for the HTTP transport
#[derive(Clone, Debug)]
pub struct TransportConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("paapi/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl TransportConfig {
    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating transport instances
#[derive(Debug, Default)]
pub struct TransportBuilder {
    config: TransportConfig,
}

impl TransportBuilder {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Build the reqwest-backed transport
    pub fn build(self) -> Result<ReqwestTransport, PaapiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| PaapiError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(ReqwestTransport {
            client,
            config: self.config,
        })
    }
}

/// Implementation of `Transport` using reqwest
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    config: TransportConfig,
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestTransport {
    /// Transport with default timeout and user agent
    pub fn new() -> Result<Self, PaapiError> {
        TransportBuilder::default().build()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, url))]
    async fn get(&self, url: &str) -> Result<Vec<u8>, PaapiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PaapiError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "non-success status, passing body to the parser");
        }

        let body = response.bytes().await.map_err(|e| {
            PaapiError::Transport(format!("Failed to read response body: {}", e))
        })?;
        trace!(status = %status, bytes = body.len(), "response received");

        Ok(body.to_vec())
    }
}
