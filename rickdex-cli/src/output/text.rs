//! Text output formatting with colors.

use rickdex_core::{Character, CharacterStatus, RequestError};
use rickdex_store::CatalogSnapshot;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";

/// Column width for character names in the list view.
const NAME_WIDTH: usize = 28;

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    // ========================================================================
    // List View
    // ========================================================================

    /// Formats the visible collection as a table, one row per character.
    pub fn format_list(&self, characters: &[Character]) -> String {
        let mut out = String::new();

        for character in characters {
            out.push_str(&format!(
                "{:>4}  {} {:<width$}  {:<8}  {}\n",
                character.id,
                self.status_glyph(character.status),
                truncate(&character.name, NAME_WIDTH),
                character.status.label(),
                character.species,
                width = NAME_WIDTH,
            ));
        }

        out
    }

    /// Formats the session status line shown under the list.
    pub fn format_status_line(&self, snapshot: &CatalogSnapshot) -> String {
        let mut parts = vec![format!("{} shown", snapshot.visible.len())];

        if let Some(filter) = snapshot.active_filter {
            parts.push(format!("filter: {}", filter));
        }
        if snapshot.loading {
            parts.push("loading".to_string());
        }
        parts.push(if snapshot.exhausted {
            "end of catalog".to_string()
        } else {
            "more pages available".to_string()
        });

        self.dim(&parts.join(" | "))
    }

    // ========================================================================
    // Detail View
    // ========================================================================

    /// Formats one character as a detail card.
    pub fn format_detail(&self, character: &Character) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{}  #{}",
            self.bold(&character.name),
            character.id
        ));
        lines.push(format!(
            "  Status    {} {}",
            self.status_glyph(character.status),
            character.status.label()
        ));
        lines.push(format!("  Species   {}", character.species));
        if !character.kind.is_empty() {
            lines.push(format!("  Type      {}", character.kind));
        }
        lines.push(format!("  Gender    {}", character.gender));
        lines.push(format!("  Origin    {}", character.origin.name));
        lines.push(format!("  Location  {}", character.location.name));
        lines.push(format!("  Episodes  {}", character.episode.len()));
        lines.push(format!("  Image     {}", self.dim(&character.image)));
        lines.push(format!(
            "  Created   {}",
            character.created.format("%Y-%m-%d")
        ));

        lines.join("\n") + "\n"
    }

    // ========================================================================
    // Errors
    // ========================================================================

    /// Formats a surfaced request error.
    pub fn format_error(&self, err: &RequestError) -> String {
        if self.use_colors {
            format!("{}✗ {}{}", RED, err, RESET)
        } else {
            format!("✗ {}", err)
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Returns a colored glyph for a status.
    pub fn status_glyph(&self, status: CharacterStatus) -> String {
        let (color, glyph) = match status {
            CharacterStatus::Alive => (GREEN, "●"),
            CharacterStatus::Dead => (RED, "●"),
            CharacterStatus::Unknown => (DIM, "○"),
        };

        if self.use_colors {
            format!("{}{}{}", color, glyph, RESET)
        } else {
            glyph.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", BOLD, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", DIM, text, RESET)
        } else {
            text.to_string()
        }
    }
}

/// Truncates to `width` characters, with an ellipsis when cut.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
