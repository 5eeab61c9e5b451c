//! Best-effort repository refresh before a sync.
//!
//! Runs `git pull <remote> <branch>` in the site root with inherited stdio.
//! The outcome is logged and returned but never turned into an error.

use std::path::Path;
use std::process::Command;

/// Upstream to pull from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub branch: String,
}

impl Default for Remote {
    fn default() -> Self {
        Self {
            name: "origin".to_string(),
            branch: "master".to_string(),
        }
    }
}

/// What happened when the pull was attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullOutcome {
    /// `git` exited with status 0.
    Updated,
    /// `git` ran but exited non-zero (`None` when killed by a signal).
    Failed { code: Option<i32> },
    /// `git` could not be started at all.
    SpawnFailed { message: String },
}

impl PullOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, PullOutcome::Updated)
    }
}

/// Pull `remote` into `workdir`. Never fails; see [`PullOutcome`].
pub fn pull(workdir: &Path, remote: &Remote) -> PullOutcome {
    pull_with("git", workdir, remote)
}

fn pull_with(program: &str, workdir: &Path, remote: &Remote) -> PullOutcome {
    tracing::debug!(
        "running {program} pull {} {} in {}",
        remote.name,
        remote.branch,
        workdir.display()
    );
    let status = Command::new(program)
        .arg("pull")
        .arg(&remote.name)
        .arg(&remote.branch)
        .current_dir(workdir)
        .status();

    match status {
        Ok(status) if status.success() => PullOutcome::Updated,
        Ok(status) => {
            tracing::warn!("{program} pull exited with {status}; continuing");
            PullOutcome::Failed {
                code: status.code(),
            }
        }
        Err(e) => {
            tracing::warn!("could not run {program} pull: {e}; continuing");
            PullOutcome::SpawnFailed {
                message: e.to_string(),
            }
        }
    }
}
