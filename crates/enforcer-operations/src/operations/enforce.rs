use enforcer_core::PullRequestContext;
use enforcer_git::{ChangedFileSet, NameStatusDiff, parse_name_status};
use tracing::debug;

use crate::traits::{GitRunner, Reporter};
use crate::{OperationError, Result};

pub struct EnforceInput {
    pub skip_label: String,
    pub changelog_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnforceOutcome {
    /// The pull request carries the skip label; no diff was run.
    Skipped,
    ChangelogUpdated,
}

pub struct EnforceOperation<G, R> {
    git: G,
    reporter: R,
}

impl<G, R> EnforceOperation<G, R>
where
    G: GitRunner,
    R: Reporter,
{
    pub fn new(git: G, reporter: R) -> Self {
        Self { git, reporter }
    }

    /// Checks that the pull request touches `input.changelog_path`.
    ///
    /// Both inputs are always reported before any decision is made. When the
    /// skip label is present the diff is never run.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::MissingChangelog`] if the changelog is not
    /// among the added or modified files, or [`OperationError::Git`] if the
    /// diff cannot be run.
    pub async fn execute(
        &self,
        context: &PullRequestContext,
        input: &EnforceInput,
    ) -> Result<EnforceOutcome> {
        self.reporter.info(&format!("Skip Label: {}", input.skip_label));
        self.reporter.info(&format!("Changelog Path: {}", input.changelog_path));

        if context.has_label(&input.skip_label) {
            debug!(label = %input.skip_label, "skip label present, not checking diff");
            return Ok(EnforceOutcome::Skipped);
        }

        let diff = NameStatusDiff::against_remote_base(context.base_ref());
        let output = self.git.run(&diff.args()).await?;

        let changed: ChangedFileSet = parse_name_status(&output).into_iter().collect();
        debug!(
            base = context.base_ref(),
            changed_files = changed.len(),
            "parsed name-status diff"
        );

        if changed.contains(&input.changelog_path) {
            Ok(EnforceOutcome::ChangelogUpdated)
        } else {
            Err(OperationError::MissingChangelog {
                path: input.changelog_path.clone(),
            })
        }
    }
}
