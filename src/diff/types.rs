/// One added or removed content line, with its diff marker stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    /// Line number on the side of the change the line belongs to.
    /// `None` when the line appears before any hunk header of its file.
    pub number: Option<usize>,
    pub text: String,
}

impl DiffLine {
    #[must_use]
    pub fn new(number: Option<usize>, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// The changes a patch makes to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    /// Last path segment of the header's target token. Never empty.
    pub filename: String,
    /// The full target token from the file header.
    pub path: String,
    pub added: Vec<DiffLine>,
    pub removed: Vec<DiffLine>,
}

impl FileDiff {
    #[must_use]
    pub fn new(filename: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            path: path.into(),
            added: Vec::new(),
            removed: Vec::new(),
        }
    }

    pub fn added_text(&self) -> impl Iterator<Item = &str> {
        self.added.iter().map(|line| line.text.as_str())
    }

    pub fn removed_text(&self) -> impl Iterator<Item = &str> {
        self.removed.iter().map(|line| line.text.as_str())
    }
}
