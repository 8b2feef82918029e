use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to read event payload '{path}'")]
    EventRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse event payload")]
    EventParse(#[from] serde_json::Error),

    #[error("event payload has no pull_request; the check only runs on pull request events")]
    NotAPullRequest,
}

pub type Result<T> = std::result::Result<T, CoreError>;
