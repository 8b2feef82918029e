mod git_runner;
mod reporter;

pub use git_runner::GitRunner;
pub use reporter::Reporter;
