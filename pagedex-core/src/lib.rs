//! pagedex core library — page index types, persistence and synchronization.
//!
//! - [`types`] — [`Index`], [`PageEntry`], [`PageName`], [`SiteLayout`]
//! - [`error`] — [`IndexError`]
//! - [`index`] — load / save the index file
//! - [`pages`] — list the pages directory, diff against the index
//! - [`tags`] — whitespace tag splitting
//! - [`metadata`] — the [`MetadataProvider`] seam for operator input
//! - [`vcs`] — best-effort `git pull`
//! - [`sync`] — the synchronizer and the status report

pub mod error;
pub mod index;
pub mod metadata;
pub mod pages;
pub mod sync;
pub mod tags;
pub mod types;
pub mod vcs;

#[cfg(test)]
mod test_support;

pub use error::IndexError;
pub use metadata::{MetadataProvider, RawMetadata};
pub use sync::{Clock, StatusReport, SyncOptions, SyncReport, SystemClock};
pub use types::{Index, PageEntry, PageName, SiteLayout};
pub use vcs::{PullOutcome, Remote};
