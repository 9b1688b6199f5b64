//! Browse command - interactive paging session.
//!
//! Plays the part of the list screen: fetch on start, fetch again on
//! demand, toggle the status filter, and surface errors with a retry
//! affordance. All rendering comes from published snapshots.

use anyhow::Result;
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use rickdex_store::CatalogSnapshot;

use crate::Cli;
use crate::output::TextFormatter;

use super::{new_session, parse_status};

/// Arguments for the browse command.
#[derive(Args, Default)]
pub struct BrowseArgs {
    /// Fetch this many pages before the first prompt.
    #[arg(long, default_value = "1")]
    pub prefetch: u32,
}

/// Runs the browse command.
pub async fn run(args: &BrowseArgs, cli: &Cli) -> Result<()> {
    let session = new_session(cli)?;
    let formatter = TextFormatter::new(!cli.no_color);

    info!(prefetch = args.prefetch, "Starting browse session");

    for _ in 0..args.prefetch.max(1) {
        session.fetch_next_page().await;
    }
    render(&formatter, &session.snapshot().await);

    println!("Commands: [n]ext page, [f]ilter alive|dead|unknown, [c]lear filter, [q]uit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        match words.next() {
            None | Some("n") => session.fetch_next_page().await,
            Some("f") => match words.next().map(parse_status) {
                Some(Ok(status)) => session.apply_filter(status).await,
                Some(Err(e)) => {
                    println!("{}", e);
                    continue;
                }
                None => {
                    println!("Usage: f alive|dead|unknown");
                    continue;
                }
            },
            Some("c") => session.clear_filter().await,
            Some("q") => break,
            Some(other) => {
                println!("Unknown command: {}", other);
                continue;
            }
        }

        render(&formatter, &session.snapshot().await);
    }

    Ok(())
}

/// Renders the current snapshot: list, then either the surfaced error with
/// its retry hint or the session status line.
fn render(formatter: &TextFormatter, snapshot: &CatalogSnapshot) {
    if let Some(err) = &snapshot.last_error {
        println!("{}", formatter.format_error(err));
        println!("Press n to retry the same page.");
        return;
    }

    print!("{}", formatter.format_list(&snapshot.visible));
    println!("{}", formatter.format_status_line(snapshot));
}
