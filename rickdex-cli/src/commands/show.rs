//! Show command - display one character in detail.
//!
//! The detail view receives the character by value from the accumulated
//! collection; it never fetches on its own.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use rickdex_core::Character;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

use super::new_session;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Character id to show.
    pub id: u64,
}

/// Runs the show command.
pub async fn run(args: &ShowArgs, cli: &Cli) -> Result<()> {
    let session = new_session(cli)?;

    let character = page_in_until_found(&session, args.id).await?;
    let Some(character) = character else {
        anyhow::bail!("No character with id {} in the catalog", args.id);
    };

    match cli.format {
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_detail(&character)?);
        }
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            print!("{}", formatter.format_detail(&character));
        }
    }

    Ok(())
}

/// Pages through the catalog until the id turns up or the catalog ends.
async fn page_in_until_found(
    session: &rickdex_store::CatalogSession,
    id: u64,
) -> Result<Option<Character>> {
    loop {
        session.fetch_next_page().await;

        if let Some(err) = session.last_error().await {
            anyhow::bail!(err);
        }

        let visible = session.visible().await;
        if let Some(found) = visible.into_iter().find(|c| c.id == id) {
            debug!(id, "Character found");
            return Ok(Some(found));
        }

        if !session.has_more().await {
            return Ok(None);
        }
    }
}
