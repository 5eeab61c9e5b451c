//! `pagedex status` — compare the index with the pages directory.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use pagedex_core::{sync, PageEntry, StatusReport};

use super::SiteArgs;

/// Arguments for `pagedex status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let layout = self.site.layout();
        let report = sync::status(&layout)
            .with_context(|| format!("status failed for {}", layout.index_file.display()))?;

        if self.json {
            print_json(&report)?;
            return Ok(());
        }

        print_table(&report);
        Ok(())
    }
}

#[derive(Serialize)]
struct StatusReportJson {
    index: String,
    pages_dir: String,
    summary: StatusSummaryJson,
    missing: Vec<String>,
    orphaned: Vec<String>,
}

#[derive(Serialize)]
struct StatusSummaryJson {
    entries: usize,
    pages: usize,
    missing: usize,
    orphaned: usize,
}

#[derive(Tabled)]
struct StatusTableRow {
    #[tabled(rename = "page")]
    page: String,
    #[tabled(rename = "state")]
    state: &'static str,
    #[tabled(rename = "title")]
    title: String,
    #[tabled(rename = "published")]
    published: String,
}

fn print_json(report: &StatusReport) -> Result<()> {
    let payload = StatusReportJson {
        index: report.index_path.display().to_string(),
        pages_dir: report.pages_dir.display().to_string(),
        summary: StatusSummaryJson {
            entries: report.index.len(),
            pages: report.pages.len(),
            missing: report.missing.len(),
            orphaned: report.orphaned.len(),
        },
        missing: report.missing.iter().map(|p| p.0.clone()).collect(),
        orphaned: report.orphaned.iter().map(|p| p.0.clone()).collect(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize status JSON")?
    );
    Ok(())
}

fn print_table(report: &StatusReport) {
    println!(
        "pagedex v{} | {} entries | {} pages | {} missing | {} orphaned",
        env!("CARGO_PKG_VERSION"),
        report.index.len(),
        report.pages.len(),
        report.missing.len(),
        report.orphaned.len(),
    );

    let mut rows: Vec<StatusTableRow> = report
        .pages
        .iter()
        .map(|page| {
            let state = if report.index.contains(page.as_str()) {
                "indexed"
            } else {
                "missing"
            };
            row(report, page.as_str(), state)
        })
        .collect();
    rows.extend(
        report
            .orphaned
            .iter()
            .map(|page| row(report, page.as_str(), "orphaned")),
    );

    if rows.is_empty() {
        println!("No pages and no index entries.");
        return;
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    if !report.missing.is_empty() {
        println!("{}", "Run 'pagedex sync' to add the missing entries.".yellow());
    }
    if !report.orphaned.is_empty() {
        println!(
            "{}",
            "Orphaned entries are kept; remove them from the index by hand if unwanted."
                .bright_black()
        );
    }
}

/// Records that do not read as a page entry are still listed, with dashes.
fn row(report: &StatusReport, page: &str, state: &'static str) -> StatusTableRow {
    let entry = report.index.get(page);
    let title = match (&entry, report.index.contains(page)) {
        (Some(e), _) => e.name.clone(),
        (None, true) => "-".to_string(),
        (None, false) => String::new(),
    };
    StatusTableRow {
        page: page.to_string(),
        state,
        title,
        published: entry
            .as_ref()
            .and_then(PageEntry::published_at)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string()),
    }
}
