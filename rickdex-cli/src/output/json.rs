//! JSON output formatting.

use anyhow::Result;
use serde::Serialize;

use rickdex_core::{Character, CharacterStatus};
use rickdex_store::CatalogSnapshot;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for the list view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOutput<'a> {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<CharacterStatus>,
    pub exhausted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub characters: &'a [Character],
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter with optional pretty-printing.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats the list view from a session snapshot.
    pub fn format_list(&self, snapshot: &CatalogSnapshot) -> Result<String> {
        let output = ListOutput {
            count: snapshot.visible.len(),
            filter: snapshot.active_filter,
            exhausted: snapshot.exhausted,
            error: snapshot.last_error.as_ref().map(ToString::to_string),
            characters: &snapshot.visible,
        };
        self.render(&output)
    }

    /// Formats one character in detail.
    pub fn format_detail(&self, character: &Character) -> Result<String> {
        self.render(character)
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(out)
    }
}
