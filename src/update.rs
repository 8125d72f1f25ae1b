//! Fetching the cheat-sheet repository with git.

use crate::cache::Cache;
use crate::error::{QuickError, Result};
use std::io::{self, ErrorKind};
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::{debug, info, instrument};

/// What an update has to do for a given cache root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePlan {
    /// No checkout yet: shallow clone.
    Clone,
    /// Existing checkout: fast-forward pull.
    Pull,
}

impl UpdatePlan {
    pub fn for_root(root: &Path) -> Self {
        if root.join(".git").exists() {
            UpdatePlan::Pull
        } else {
            UpdatePlan::Clone
        }
    }

    fn action(self) -> &'static str {
        match self {
            UpdatePlan::Clone => "clone",
            UpdatePlan::Pull => "pull",
        }
    }

    /// Build the git invocation for this plan.
    pub fn command(self, root: &Path, repository: &str) -> Command {
        let mut cmd = Command::new("git");
        match self {
            UpdatePlan::Clone => {
                cmd.args(["clone", "--depth", "1", "--quiet", repository])
                    .arg(root);
            }
            UpdatePlan::Pull => {
                cmd.arg("-C")
                    .arg(root)
                    .args(["pull", "--ff-only", "--quiet"]);
            }
        }
        cmd
    }
}

fn spawn_error(e: io::Error) -> QuickError {
    match e.kind() {
        ErrorKind::NotFound => QuickError::GitNotFound,
        _ => QuickError::Io(e),
    }
}

fn check_status(plan: UpdatePlan, status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(QuickError::Git {
            action: plan.action(),
            status,
        })
    }
}

/// Clone or pull the cheat-sheet repository into `root`.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn update(root: &Path, repository: &str) -> Result<UpdatePlan> {
    let plan = UpdatePlan::for_root(root);

    if plan == UpdatePlan::Clone
        && let Some(parent) = root.parent()
    {
        std::fs::create_dir_all(parent)?;
    }

    info!(action = plan.action(), repository, "updating quick files");
    let status = plan
        .command(root, repository)
        .status()
        .map_err(spawn_error)?;
    check_status(plan, status)?;

    debug!(action = plan.action(), "git finished");
    Ok(plan)
}

/// Fetch the quick files if the cache has never been populated.
///
/// Returns the plan that ran, or `None` when the cache already exists.
pub fn ensure_cache(cache: &Cache, repository: &str) -> Result<Option<UpdatePlan>> {
    if cache.exists() {
        return Ok(None);
    }

    info!(root = %cache.root().display(), "cache is empty, fetching quick files");
    update(cache.root(), repository).map(Some)
}
