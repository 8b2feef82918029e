use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] enforcer_git::GitError),

    #[error("No update to {path} found!")]
    MissingChangelog { path: String },
}

pub type Result<T> = std::result::Result<T, OperationError>;
