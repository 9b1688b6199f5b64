//! Response body decoding.

use serde::de::DeserializeOwned;
use tracing::warn;

use rickdex_core::ParsingError;

/// Decodes a raw response body into the requested shape.
///
/// Any structural or type mismatch maps to [`ParsingError::InvalidData`]
/// with the underlying serde cause preserved for diagnostics.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ParsingError> {
    serde_json::from_slice(bytes).map_err(|e| {
        warn!(error = %e, "Failed to decode response body");
        ParsingError::InvalidData(e.to_string())
    })
}

// ============================================================================
// Tests
// ============================================================================
