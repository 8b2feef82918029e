/// Pull request metadata the check runs against.
///
/// Built once per run, either from the event payload or from command-line
/// flags, and passed explicitly to everything that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestContext {
    base_ref: String,
    labels: Vec<String>,
}

impl PullRequestContext {
    #[must_use]
    pub fn new(base_ref: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            base_ref: base_ref.into(),
            labels,
        }
    }

    #[must_use]
    pub fn base_ref(&self) -> &str {
        &self.base_ref
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Exact, case-sensitive label lookup.
    #[must_use]
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label == name)
    }
}
