//! pagedex — keep a site's `index.json` in step with its `pages/` directory.
//!
//! # Usage
//!
//! ```text
//! pagedex                                   (same as `pagedex sync`)
//! pagedex sync [--root DIR] [--pages DIR] [--index FILE]
//!              [--no-pull] [--remote NAME] [--branch NAME] [--dry-run]
//! pagedex status [--root DIR] [--pages DIR] [--index FILE] [--json]
//! ```

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{status::StatusArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "pagedex",
    version,
    about = "Fill in missing page entries in a site's index.json",
    long_about = None,
)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence when set).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pull, prompt for every page missing from the index, and save it.
    Sync(SyncArgs),

    /// Show pages missing from the index and entries without a page.
    Status(StatusArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or_else(|| Commands::Sync(SyncArgs::default())) {
        Commands::Sync(args) => args.run(),
        Commands::Status(args) => args.run(),
    }
}

/// Logs go to stderr so prompts and reports on stdout stay clean.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
