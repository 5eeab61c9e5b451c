//! The synchronizer: pull, load, scan, fill in missing entries, save.
//!
//! ## `run` — 4-step flow
//!
//! 1. Best-effort VCS refresh (skipped when `SyncOptions::pull` is `None`).
//! 2. Load the index; missing or malformed is fatal.
//! 3. For every page without an index key: announce, ask the provider,
//!    split tags, stamp with the clock, insert.
//! 4. Save the full index (skipped in dry-run mode).
//!
//! Existing entries are never revisited and never removed.

use std::path::PathBuf;

use chrono::Utc;

use crate::error::IndexError;
use crate::metadata::MetadataProvider;
use crate::tags::split_tags;
use crate::types::{Index, PageEntry, PageName, SiteLayout};
use crate::vcs::{self, PullOutcome, Remote};
use crate::{index, pages};

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Source of entry creation timestamps (Unix seconds).
pub trait Clock {
    fn now(&self) -> i64;
}

/// Wall clock via `chrono::Utc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

// ---------------------------------------------------------------------------
// Options and reports
// ---------------------------------------------------------------------------

/// Knobs for a single [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Upstream to pull before loading; `None` skips the refresh.
    pub pull: Option<Remote>,
    /// Report missing pages without asking for metadata or writing.
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            pull: Some(Remote::default()),
            dry_run: false,
        }
    }
}

/// Outcome of a [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    pub index_path: PathBuf,
    /// `None` when the refresh was skipped.
    pub pull: Option<PullOutcome>,
    /// Pages that had no entry when the run started.
    pub missing: Vec<PageName>,
    /// Pages that received a new entry (empty in dry-run mode).
    pub added: Vec<PageName>,
    /// Entries in the index after the run.
    pub total: usize,
    /// Whether the index file was rewritten.
    pub written: bool,
}

/// Point-in-time comparison of the index and the pages directory.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub index_path: PathBuf,
    pub pages_dir: PathBuf,
    pub index: Index,
    pub pages: Vec<PageName>,
    pub missing: Vec<PageName>,
    pub orphaned: Vec<PageName>,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Bring the index up to date with the pages directory.
pub fn run(
    layout: &SiteLayout,
    provider: &mut dyn MetadataProvider,
    clock: &dyn Clock,
    options: &SyncOptions,
) -> Result<SyncReport, IndexError> {
    let pull = options
        .pull
        .as_ref()
        .map(|remote| vcs::pull(&layout.root, remote));

    let mut index = index::load_at(&layout.index_file)?;
    let page_list = pages::list_pages(&layout.pages_dir)?;
    let missing = pages::missing_pages(&index, &page_list);

    if options.dry_run {
        for page in &missing {
            tracing::info!("[dry-run] missing entry: {page}");
        }
        return Ok(SyncReport {
            index_path: layout.index_file.clone(),
            pull,
            total: index.len(),
            missing,
            added: Vec::new(),
            written: false,
        });
    }

    let mut added = Vec::with_capacity(missing.len());
    for page in &missing {
        provider.announce(page)?;
        let answers = provider.provide(page)?;
        let entry = PageEntry::new(answers.title, split_tags(&answers.tags), clock.now());
        tracing::info!("adding entry for {page}: {:?} {:?}", entry.name, entry.tags);
        index.insert(page.clone(), entry);
        added.push(page.clone());
    }

    index::save_at(&layout.index_file, &index)?;

    Ok(SyncReport {
        index_path: layout.index_file.clone(),
        pull,
        missing,
        added,
        total: index.len(),
        written: true,
    })
}

/// Compare the index with the pages directory without changing anything.
pub fn status(layout: &SiteLayout) -> Result<StatusReport, IndexError> {
    let index = index::load_at(&layout.index_file)?;
    let page_list = pages::list_pages(&layout.pages_dir)?;
    let missing = pages::missing_pages(&index, &page_list);
    let orphaned = pages::orphaned_entries(&index, &page_list);

    Ok(StatusReport {
        index_path: layout.index_file.clone(),
        pages_dir: layout.pages_dir.clone(),
        index,
        pages: page_list,
        missing,
        orphaned,
    })
}
