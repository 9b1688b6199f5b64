//! List command - fetch and display catalog pages.

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

use super::{new_session, parse_status};

/// Arguments for the list command.
#[derive(Args, Default)]
pub struct ListArgs {
    /// Number of pages to fetch.
    #[arg(long, short, default_value = "1")]
    pub pages: u32,

    /// Status filter, applied client-side (alive, dead, unknown).
    #[arg(long, short)]
    pub status: Option<String>,
}

/// Runs the list command.
pub async fn run(args: &ListArgs, cli: &Cli) -> Result<()> {
    let session = new_session(cli)?;

    info!(pages = args.pages, "Fetching catalog pages");

    for _ in 0..args.pages.max(1) {
        session.fetch_next_page().await;

        if let Some(err) = session.last_error().await {
            anyhow::bail!(err);
        }
        if !session.has_more().await {
            break;
        }
    }

    if let Some(status) = &args.status {
        session.apply_filter(parse_status(status)?).await;
    }

    let snapshot = session.snapshot().await;

    match cli.format {
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_list(&snapshot)?);
        }
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            print!("{}", formatter.format_list(&snapshot.visible));
            if !cli.quiet {
                println!("{}", formatter.format_status_line(&snapshot));
            }
        }
    }

    Ok(())
}
