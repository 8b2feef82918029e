pub const DEFAULT_CHANGELOG_PATH: &str = "CHANGELOG.md";
pub const VERSIONED_CHANGELOG_DIR: &str = "changelogs";

const VERSIONED_BRANCH_PREFIXES: &[&str] = &["release/", "hotfix/"];

/// Resolves the changelog file a pull request into `base_ref` must touch.
///
/// A non-empty `explicit` path always wins. Otherwise `release/x.y.z` and
/// `hotfix/x.y.z` map to `changelogs/x.y.md` and every other branch maps to
/// `CHANGELOG.md`. The version segment is not validated, so `release/2`
/// resolves to `changelogs/2.md`.
#[must_use]
pub fn resolve_changelog_path(base_ref: &str, explicit: Option<&str>) -> String {
    if let Some(path) = explicit.filter(|path| !path.is_empty()) {
        return path.to_string();
    }

    if is_versioned_branch(base_ref) {
        let version = base_ref.split('/').nth(1).unwrap_or_default();
        let major_minor = version.split('.').take(2).collect::<Vec<_>>().join(".");
        return format!("{VERSIONED_CHANGELOG_DIR}/{major_minor}.md");
    }

    DEFAULT_CHANGELOG_PATH.to_string()
}

fn is_versioned_branch(base_ref: &str) -> bool {
    VERSIONED_BRANCH_PREFIXES
        .iter()
        .any(|prefix| base_ref.starts_with(prefix))
}
