use std::path::Path;

use enforcer_operations::operations::{EnforceInput, EnforceOperation};
use enforcer_operations::providers::GitCliRunner;
use tracing::debug;

use super::CheckArgs;
use crate::error::Result;
use crate::output::ConsoleReporter;

pub(crate) async fn run(args: CheckArgs, start_path: &Path) -> Result<()> {
    let context = args.pull_request.context()?;
    let changelog_path = args.pull_request.changelog_path(&context);

    let operation = EnforceOperation::new(GitCliRunner::new(start_path), ConsoleReporter);

    let input = EnforceInput {
        skip_label: args.skip_label,
        changelog_path,
    };

    let outcome = operation.execute(&context, &input).await?;
    debug!(?outcome, "changelog check passed");

    Ok(())
}
