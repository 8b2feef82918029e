mod git;

pub use git::GitCliRunner;
