use crate::{DiffEntry, FileStatus};

/// Parses `git diff --name-status` output.
///
/// Lines are split on `\n` or `\r\n`. A single leading status letter and the
/// whitespace after it are stripped; the rest of the line is the path. Lines
/// without a status letter are kept verbatim, so a blank line becomes an
/// entry with an empty path.
#[must_use]
pub fn parse_name_status(output: &str) -> Vec<DiffEntry> {
    output
        .split('\n')
        .map(|line| parse_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

fn parse_line(line: &str) -> DiffEntry {
    let mut chars = line.chars();
    match chars.next().and_then(FileStatus::from_code) {
        Some(status) => DiffEntry::new(Some(status), chars.as_str().trim_start()),
        None => DiffEntry::new(None, line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChangedFileSet;

    fn paths(output: &str) -> Vec<String> {
        parse_name_status(output)
            .into_iter()
            .map(|entry| entry.path)
            .collect()
    }

    #[test]
    fn strips_status_and_space_padding() {
        assert_eq!(
            paths("M       .env.js\nA       an_added_changed_file.js"),
            [".env.js", "an_added_changed_file.js"]
        );
    }

    #[test]
    fn strips_tab_separator() {
        let entries = parse_name_status("M\tCHANGELOG.md\nA\tchangelogs/2.99.md");

        assert_eq!(
            entries,
            [
                DiffEntry::new(Some(FileStatus::Modified), "CHANGELOG.md"),
                DiffEntry::new(Some(FileStatus::Added), "changelogs/2.99.md"),
            ]
        );
    }

    #[test]
    fn accepts_crlf_line_endings() {
        assert_eq!(
            paths("M\tsrc/main.rs\r\nM\tCHANGELOG.md\r\n"),
            ["src/main.rs", "CHANGELOG.md", ""]
        );
    }

    #[test]
    fn blank_lines_become_empty_paths() {
        let entries = parse_name_status("M\ta.rs\n\nA\tb.rs\n");

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1], DiffEntry::new(None, ""));
        assert_eq!(entries[3], DiffEntry::new(None, ""));
    }

    #[test]
    fn empty_output_yields_single_empty_entry() {
        assert_eq!(paths(""), [""]);
    }

    #[test]
    fn only_one_status_letter_is_stripped() {
        assert_eq!(paths("MM\tfile.rs"), ["M\tfile.rs"]);
    }

    #[test]
    fn line_without_status_letter_is_kept_verbatim() {
        assert_eq!(paths("  lowercase.md"), ["  lowercase.md"]);
        assert_eq!(paths("docs/notes.md"), ["docs/notes.md"]);
    }

    #[test]
    fn inner_whitespace_in_paths_is_preserved() {
        assert_eq!(
            paths("A\tdocs/release notes.md"),
            ["docs/release notes.md"]
        );
    }

    #[test]
    fn blank_entries_never_match_a_changelog() {
        let set: ChangedFileSet = parse_name_status("\n\n").into_iter().collect();

        assert!(!set.contains("CHANGELOG.md"));
        assert_eq!(set.len(), 1);
    }
}
