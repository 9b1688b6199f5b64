//! Error taxonomy for catalog requests.
//!
//! Transport and decoding failures are classified here and never recovered
//! from where they occur; callers get a tagged [`RequestError`] and decide
//! what is user-visible.

use thiserror::Error;

// ============================================================================
// Network Error
// ============================================================================

/// Error type for transport-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The request URL could not be constructed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered outside the 200-299 range.
    #[error("Unexpected status code: {0}")]
    UnexpectedStatusCode(u16),

    /// The server answered with a success status but an empty body.
    #[error("No data returned from server")]
    NoData,

    /// The request failed at the transport level (timeout, malformed response).
    #[error("Invalid server response: {0}")]
    InvalidServerResponse(String),

    /// The connection could not be established.
    #[error("No internet connection")]
    NoInternetConnection,
}

impl NetworkError {
    /// Returns the HTTP status code if this failure carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatusCode(code) => Some(*code),
            _ => None,
        }
    }
}

// ============================================================================
// Parsing Error
// ============================================================================

/// Error type for response decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsingError {
    /// The payload did not match the expected shape.
    ///
    /// The underlying serde cause is preserved in rendered form for
    /// diagnostics.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Request Error
// ============================================================================

/// Error type for a full request, tagged by origin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request failed before a response body was obtained.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// A response body was obtained but could not be decoded.
    #[error("Parsing error: {0}")]
    Parsing(#[from] ParsingError),
}

impl RequestError {
    /// Returns the HTTP status code if the failure carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Network(err) => err.status_code(),
            Self::Parsing(_) => None,
        }
    }

    /// Returns true if this is a network-classified failure.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns true if this is a parsing-classified failure.
    pub fn is_parsing(&self) -> bool {
        matches!(self, Self::Parsing(_))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_accessor() {
        let err = RequestError::from(NetworkError::UnexpectedStatusCode(404));
        assert_eq!(err.status_code(), Some(404));

        let err = RequestError::from(NetworkError::NoData);
        assert_eq!(err.status_code(), None);

        let err = RequestError::from(ParsingError::InvalidData("bad".to_string()));
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_origin_tagging() {
        let err = RequestError::from(NetworkError::NoInternetConnection);
        assert!(err.is_network());
        assert!(!err.is_parsing());

        let err = RequestError::from(ParsingError::InvalidData("bad".to_string()));
        assert!(err.is_parsing());
    }

    #[test]
    fn test_display_preserves_cause() {
        let err = RequestError::from(ParsingError::InvalidData(
            "expected value at line 1".to_string(),
        ));
        assert!(err.to_string().contains("expected value at line 1"));
    }
}
