use std::path::Path;

use serde::Deserialize;

use crate::{CoreError, PullRequestContext, Result};

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    base: BasePayload,
    #[serde(default)]
    labels: Vec<LabelPayload>,
}

#[derive(Debug, Deserialize)]
struct BasePayload {
    #[serde(rename = "ref")]
    ref_name: String,
}

#[derive(Debug, Deserialize)]
struct LabelPayload {
    name: String,
}

/// Extracts the pull request context from a `pull_request` event payload.
///
/// # Errors
///
/// Returns [`CoreError::EventParse`] for malformed JSON or a missing
/// `base.ref`, and [`CoreError::NotAPullRequest`] when the payload carries
/// no `pull_request` object.
pub fn parse_event(json: &str) -> Result<PullRequestContext> {
    let payload: EventPayload = serde_json::from_str(json)?;
    let pull_request = payload.pull_request.ok_or(CoreError::NotAPullRequest)?;

    let labels = pull_request
        .labels
        .into_iter()
        .map(|label| label.name)
        .collect();

    Ok(PullRequestContext::new(pull_request.base.ref_name, labels))
}

/// # Errors
///
/// Returns [`CoreError::EventRead`] if the file cannot be read, otherwise the
/// errors of [`parse_event`].
pub fn read_event(path: &Path) -> Result<PullRequestContext> {
    let json = std::fs::read_to_string(path).map_err(|source| CoreError::EventRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_event(&json)
}
