use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::{GitError, Result};

const REMOTE: &str = "origin";

/// Arguments for listing files added or modified relative to the remote
/// copy of a base branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameStatusDiff {
    base: String,
}

impl NameStatusDiff {
    #[must_use]
    pub fn against_remote_base(base_ref: &str) -> Self {
        Self {
            base: format!("{REMOTE}/{base_ref}"),
        }
    }

    #[must_use]
    pub fn args(&self) -> Vec<String> {
        vec![
            "diff".to_string(),
            self.base.clone(),
            "--name-status".to_string(),
            "--diff-filter=AM".to_string(),
        ]
    }
}

/// Runs the `git` binary found on `PATH` inside a working directory.
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Runs git to completion and returns its standard output.
    ///
    /// Standard error is passed through to the console.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Spawn`] if git cannot be started and
    /// [`GitError::CommandFailed`] if it exits unsuccessfully.
    pub async fn run(&self, args: &[String]) -> Result<String> {
        let joined = args.join(" ");
        debug!(workdir = %self.workdir.display(), args = %joined, "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|source| GitError::Spawn {
                args: joined.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                args: joined,
                status: output.status.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
