use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] enforcer_core::CoreError),

    #[error(transparent)]
    Operation(#[from] enforcer_operations::OperationError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("repository directory '{}' does not exist", .0.display())]
    WorkdirNotFound(PathBuf),

    #[error("no pull request context: pass --base-ref or --event-path, or set GITHUB_EVENT_PATH")]
    MissingContext,
}

pub type Result<T> = std::result::Result<T, CliError>;
