//! Page envelope types.

use serde::{Deserialize, Serialize};

use super::character::Character;

// ============================================================================
// Page Info
// ============================================================================

/// Pagination metadata attached to every catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of items in the catalog.
    pub count: u64,
    /// Total number of pages.
    pub pages: u64,
    /// URL of the next page, absent on the terminal page.
    pub next: Option<String>,
    /// URL of the previous page, absent on the first page.
    pub prev: Option<String>,
}

// ============================================================================
// Character Page
// ============================================================================

/// One page of catalog results plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    /// Pagination metadata.
    pub info: PageInfo,
    /// The characters on this page.
    #[serde(rename = "results")]
    pub characters: Vec<Character>,
}

impl CharacterPage {
    /// Returns true if the server signals more pages exist.
    pub fn has_next(&self) -> bool {
        self.info.next.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================
