//! Request pipeline: transport plus decoding as one typed operation.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use rickdex_core::{NetworkError, RequestError};

use crate::decoder;
use crate::request::ApiRequest;
use crate::transport::{HttpTransport, Transport};

// ============================================================================
// Request Client
// ============================================================================

/// Composes a [`Transport`] with the decoder into a single typed call.
///
/// The client performs at most one network request per call and never
/// retries. Failures come back as [`RequestError`], tagged by origin;
/// the client never inspects their content.
#[derive(Clone)]
pub struct RequestClient {
    transport: Arc<dyn Transport>,
}

impl RequestClient {
    /// Creates a client over the default HTTP transport.
    pub fn new() -> Result<Self, NetworkError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new()?)))
    }

    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Performs the request and decodes the response body.
    pub async fn perform<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<T, RequestError> {
        let body = self.transport.send(request).await?;
        debug!(bytes = body.len(), "Decoding response");
        let value = decoder::decode(&body)?;
        Ok(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
