//! `pagedex sync` — pull, prompt for missing entries, rewrite the index.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagedex_core::{sync, Remote, SyncOptions, SyncReport, SystemClock};

use super::SiteArgs;
use crate::prompt::ConsolePrompt;

const DEFAULT_REMOTE: &str = "origin";
const DEFAULT_BRANCH: &str = "master";

/// Arguments for `pagedex sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Do not run `git pull` first.
    #[arg(long)]
    pub no_pull: bool,

    /// Remote to pull from.
    #[arg(long, default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Branch to pull.
    #[arg(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// List missing pages without prompting or writing the index.
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for SyncArgs {
    fn default() -> Self {
        Self {
            site: SiteArgs::default(),
            no_pull: false,
            remote: DEFAULT_REMOTE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            dry_run: false,
        }
    }
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let layout = self.site.layout();
        let options = SyncOptions {
            pull: (!self.no_pull).then(|| Remote {
                name: self.remote.clone(),
                branch: self.branch.clone(),
            }),
            dry_run: self.dry_run,
        };

        let mut prompt = ConsolePrompt::stdio();
        let report = sync::run(&layout, &mut prompt, &SystemClock, &options)
            .with_context(|| format!("sync failed for {}", layout.index_file.display()))?;

        print_report(&report);
        Ok(())
    }
}

fn print_report(report: &SyncReport) {
    let index = report.index_path.display();

    if !report.written {
        if report.missing.is_empty() {
            println!("[dry-run] ✓ {index} — nothing missing");
            return;
        }
        println!(
            "[dry-run] {} missing from {index}",
            format!("{} page(s)", report.missing.len()).yellow()
        );
        for page in &report.missing {
            println!("  ~  {page}");
        }
        return;
    }

    if report.added.is_empty() {
        println!("✓ {index} — nothing to add ({} entries)", report.total);
        return;
    }

    println!(
        "{} {index} updated ({} added, {} entries)",
        "✓".green(),
        report.added.len(),
        report.total
    );
    for page in &report.added {
        println!("  ✎  {page}");
    }
}
