mod changelog;
pub mod error;
mod event;
pub mod types;

pub use changelog::{
    DEFAULT_CHANGELOG_PATH, VERSIONED_CHANGELOG_DIR, resolve_changelog_path,
};
pub use error::*;
pub use event::{parse_event, read_event};
pub use types::*;
