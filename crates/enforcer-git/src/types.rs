use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
    Copied,
    TypeChanged,
    Unmerged,
    Unknown,
}

impl FileStatus {
    /// Maps a `--name-status` letter. Any other uppercase letter is accepted
    /// as [`FileStatus::Unknown`].
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(Self::Added),
            'M' => Some(Self::Modified),
            'D' => Some(Self::Deleted),
            'R' => Some(Self::Renamed),
            'C' => Some(Self::Copied),
            'T' => Some(Self::TypeChanged),
            'U' => Some(Self::Unmerged),
            c if c.is_ascii_uppercase() => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// One line of `git diff --name-status` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub status: Option<FileStatus>,
    pub path: String,
}

impl DiffEntry {
    #[must_use]
    pub fn new(status: Option<FileStatus>, path: impl Into<String>) -> Self {
        Self {
            status,
            path: path.into(),
        }
    }
}

/// Paths touched by the diff, compared by exact string equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedFileSet {
    paths: HashSet<String>,
}

impl ChangedFileSet {
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

impl FromIterator<DiffEntry> for ChangedFileSet {
    fn from_iter<I: IntoIterator<Item = DiffEntry>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(|entry| entry.path).collect(),
        }
    }
}
