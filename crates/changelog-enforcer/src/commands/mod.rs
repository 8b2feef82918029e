mod check;
mod resolve;

use std::convert::Infallible;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use enforcer_core::{PullRequestContext, read_event, resolve_changelog_path};

use crate::error::{CliError, Result};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fail unless the pull request updates its changelog
    Check(CheckArgs),
    /// Print the changelog path required for the pull request
    Resolve(ResolveArgs),
}

impl Commands {
    pub(crate) async fn execute(self, start_path: &Path) -> Result<()> {
        match self {
            Self::Check(args) => check::run(args, start_path).await,
            Self::Resolve(args) => resolve::run(&args),
        }
    }
}

#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Label that exempts a pull request from the check
    #[arg(
        long,
        env = "INPUT_SKIPLABEL",
        default_value = "Skip-Changelog",
        value_parser = trimmed
    )]
    pub skip_label: String,

    #[command(flatten)]
    pub pull_request: PullRequestArgs,
}

#[derive(Args)]
pub(crate) struct ResolveArgs {
    #[command(flatten)]
    pub pull_request: PullRequestArgs,
}

#[derive(Args)]
pub(crate) struct PullRequestArgs {
    /// Changelog file to require instead of deriving it from the base branch
    #[arg(long, env = "INPUT_CHANGELOGPATH", value_parser = trimmed)]
    pub changelog_path: Option<String>,

    /// Pull request event payload (JSON)
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Base branch name; takes precedence over the event payload
    #[arg(long)]
    pub base_ref: Option<String>,

    /// Pull request label, repeatable (requires --base-ref)
    #[arg(long = "label", requires = "base_ref")]
    pub labels: Vec<String>,
}

// Action inputs arrive with surrounding whitespace intact; a blank override
// trims to empty and falls back to the branch rules.
fn trimmed(value: &str) -> std::result::Result<String, Infallible> {
    Ok(value.trim().to_string())
}

impl PullRequestArgs {
    pub(crate) fn context(&self) -> Result<PullRequestContext> {
        if let Some(base_ref) = &self.base_ref {
            return Ok(PullRequestContext::new(base_ref.clone(), self.labels.clone()));
        }

        match &self.event_path {
            Some(path) => Ok(read_event(path)?),
            None => Err(CliError::MissingContext),
        }
    }

    pub(crate) fn changelog_path(&self, context: &PullRequestContext) -> String {
        resolve_changelog_path(context.base_ref(), self.changelog_path.as_deref())
    }
}
