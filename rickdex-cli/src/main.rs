// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Rickdex CLI - browse the Rick and Morty character catalog from the
//! command line.
//!
//! # Examples
//!
//! ```bash
//! # List the first page of the catalog
//! rickdex
//!
//! # List three pages, only dead characters
//! rickdex list --pages 3 --status dead
//!
//! # JSON output
//! rickdex list --format json --pretty
//!
//! # Show one character by id
//! rickdex show 42
//!
//! # Interactive session (infinite scroll in a terminal)
//! rickdex browse
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{browse, list, show};

// ============================================================================
// CLI Definition
// ============================================================================

/// Rickdex CLI - character catalog browsing.
#[derive(Parser)]
#[command(name = "rickdex")]
#[command(about = "Browse the Rick and Morty character catalog")]
#[command(long_about = r#"
Rickdex browses a paginated character catalog over its public REST API.

Pages accumulate in memory as you go; the status filter applies to
everything fetched so far without touching the server.

Examples:
  rickdex                        # First page of the catalog
  rickdex list --pages 3         # Three pages in one go
  rickdex list --status alive    # Filter applied client-side
  rickdex show 42                # One character in detail
  rickdex browse                 # Interactive paging session
"#)]
#[command(version)]
#[command(author = "Rickdex Contributors")]
pub struct Cli {
    /// Subcommand to run. If none, runs 'list' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// API root to talk to.
    #[arg(long, default_value = rickdex_fetch::DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List catalog pages (default if no command specified).
    #[command(visible_alias = "l")]
    List(list::ListArgs),

    /// Show one character in detail.
    #[command(visible_alias = "s")]
    Show(show::ShowArgs),

    /// Interactive paging session.
    #[command(visible_alias = "b")]
    Browse(browse::BrowseArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("rickdex=debug,info")
    } else {
        EnvFilter::new("rickdex=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::List(args)) => list::run(args, &cli).await,
        Some(Commands::Show(args)) => show::run(args, &cli).await,
        Some(Commands::Browse(args)) => browse::run(args, &cli).await,
        None => {
            // Default to the list command
            list::run(&list::ListArgs::default(), &cli).await
        }
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}
