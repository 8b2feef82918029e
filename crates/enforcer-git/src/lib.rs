mod cli;
mod error;
mod parse;
mod types;

pub use cli::{GitCli, NameStatusDiff};
pub use error::GitError;
pub use parse::parse_name_status;
pub use types::{ChangedFileSet, DiffEntry, FileStatus};

pub type Result<T> = std::result::Result<T, GitError>;
