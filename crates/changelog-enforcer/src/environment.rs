use std::io::IsTerminal;

const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
    "TF_BUILD",
];

/// How the run's single failure is surfaced to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureFormat {
    /// `::error::` workflow command understood by GitHub Actions.
    WorkflowCommand,
    /// `error:` line plus its cause chain on stderr.
    Plain,
}

pub fn failure_format() -> FailureFormat {
    if is_github_actions() {
        FailureFormat::WorkflowCommand
    } else {
        FailureFormat::Plain
    }
}

pub fn use_ansi() -> bool {
    detect_ci_env_var().is_none() && std::io::stderr().is_terminal()
}

fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|value| value == "true")
}

fn detect_ci_env_var() -> Option<String> {
    CI_ENV_VARS
        .iter()
        .find(|var| std::env::var_os(var).is_some())
        .map(|var| (*var).to_string())
}
