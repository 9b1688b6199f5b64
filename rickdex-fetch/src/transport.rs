//! HTTP transport for the catalog API.
//!
//! The transport performs exactly one HTTP call per invocation and maps
//! every failure onto the [`NetworkError`] taxonomy. It never retries and
//! never caches.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

use rickdex_core::NetworkError;

use crate::request::{ApiRequest, Method};

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent string for Rickdex.
const USER_AGENT: &str = concat!("rickdex/", env!("CARGO_PKG_VERSION"));

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com";

// ============================================================================
// Transport Trait
// ============================================================================

/// One HTTP call per invocation, returning the raw response body.
///
/// Object-safe so tests can substitute a scripted double for the real
/// network.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the raw response body unaltered.
    async fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, NetworkError>;
}

// ============================================================================
// HTTP Transport
// ============================================================================

/// HTTP transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Creates a transport against the default API root.
    pub fn new() -> Result<Self, NetworkError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a transport against a custom API root.
    pub fn with_base_url(base: &str) -> Result<Self, NetworkError> {
        let base_url = Url::parse(base).map_err(|e| NetworkError::InvalidUrl(e.to_string()))?;

        let inner = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| NetworkError::InvalidServerResponse(e.to_string()))?;

        Ok(Self { inner, base_url })
    }

    /// Builds the final URL: path joined onto the root, query pairs appended
    /// in order, empty values omitted.
    fn build_url(&self, request: &ApiRequest) -> Result<Url, NetworkError> {
        let mut url = self
            .base_url
            .join(&request.path)
            .map_err(|e| NetworkError::InvalidUrl(e.to_string()))?;

        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                if !value.is_empty() {
                    pairs.append_pair(key, value);
                }
            }
        }
        // query_pairs_mut leaves a dangling "?" when nothing was appended
        if url.query().is_some_and(str::is_empty) {
            url.set_query(None);
        }

        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self), fields(path = %request.path))]
    async fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, NetworkError> {
        let url = self.build_url(request)?;
        debug!(url = %url, "GET request");

        let response = match request.method {
            Method::Get => self.inner.get(url).send().await,
        }
        .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Unexpected status code");
            return Err(NetworkError::UnexpectedStatusCode(status.as_u16()));
        }

        let body = response.bytes().await.map_err(classify)?;
        if body.is_empty() {
            warn!("No data returned from server");
            return Err(NetworkError::NoData);
        }

        debug!(status = %status, bytes = body.len(), "Response received");
        Ok(body.to_vec())
    }
}

/// Maps a reqwest failure onto the transport error taxonomy.
fn classify(err: reqwest::Error) -> NetworkError {
    if err.is_connect() {
        NetworkError::NoInternetConnection
    } else {
        NetworkError::InvalidServerResponse(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
