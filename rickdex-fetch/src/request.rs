//! Typed request descriptions for the catalog API.

use rickdex_core::CharacterStatus;

// ============================================================================
// Method
// ============================================================================

/// HTTP method for a catalog request.
///
/// The catalog is read-only, so only GET exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// HTTP GET.
    #[default]
    Get,
}

// ============================================================================
// API Request
// ============================================================================

/// Description of one catalog API call: a path plus ordered query parameters.
///
/// Query values are kept verbatim; a pair whose value is the empty string is
/// omitted from the final URL by the transport. The catalog treats a missing
/// `status` parameter as "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Resource path relative to the API root.
    pub path: String,
    /// Ordered query parameters.
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Creates a GET request for the given path.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Appends a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Builds the request for one page of the character listing.
    ///
    /// The filter's raw wire value rides along as `status`; the empty string
    /// is the wire convention for "no filter".
    pub fn character_page(page: u32, filter: Option<CharacterStatus>) -> Self {
        Self::get("/api/character")
            .with_query("page", page.to_string())
            .with_query(
                "status",
                filter.map_or_else(String::new, |status| status.wire_value().to_string()),
            )
    }

    /// Returns the value of a query parameter, if present.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_page_request_shape() {
        let request = ApiRequest::character_page(3, Some(CharacterStatus::Dead));
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/api/character");
        assert_eq!(request.query_value("page"), Some("3"));
        assert_eq!(request.query_value("status"), Some("Dead"));
    }

    #[test]
    fn test_no_filter_is_empty_string_on_the_wire() {
        let request = ApiRequest::character_page(1, None);
        assert_eq!(request.query_value("status"), Some(""));
    }

    #[test]
    fn test_query_order_preserved() {
        let request = ApiRequest::character_page(1, None);
        let keys: Vec<&str> = request.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["page", "status"]);
    }
}
