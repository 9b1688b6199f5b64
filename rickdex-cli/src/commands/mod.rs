//! CLI command implementations.

pub mod browse;
pub mod list;
pub mod show;

use std::sync::Arc;

use anyhow::{Result, bail};

use rickdex_core::CharacterStatus;
use rickdex_fetch::{HttpTransport, RequestClient};
use rickdex_store::CatalogSession;

use crate::Cli;

/// Creates a browsing session against the configured API root.
pub fn new_session(cli: &Cli) -> Result<CatalogSession> {
    let transport = HttpTransport::with_base_url(&cli.base_url)?;
    Ok(CatalogSession::new(RequestClient::with_transport(
        Arc::new(transport),
    )))
}

/// Parses a status filter from its CLI spelling.
pub fn parse_status(value: &str) -> Result<CharacterStatus> {
    match value.to_ascii_lowercase().as_str() {
        "alive" => Ok(CharacterStatus::Alive),
        "dead" => Ok(CharacterStatus::Dead),
        "unknown" => Ok(CharacterStatus::Unknown),
        other => bail!("Unknown status: {} (expected alive, dead, or unknown)", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_spellings() {
        assert_eq!(parse_status("alive").unwrap(), CharacterStatus::Alive);
        assert_eq!(parse_status("Dead").unwrap(), CharacterStatus::Dead);
        assert_eq!(parse_status("UNKNOWN").unwrap(), CharacterStatus::Unknown);
        assert!(parse_status("ghost").is_err());
    }
}
