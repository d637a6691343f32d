use regex::{Captures, Regex};

use crate::error::{DiffSlocError, Result};

use super::{DiffLine, FileDiff};

/// svn: `Index: path/to/file`
const SVN_HEADER: &str = "Index: ";
/// git: `diff --git a/path/to/file b/path/to/file`
const GIT_HEADER: &str = "diff --git ";
const FROM_FILE_MARKER: &str = "--- ";
const TO_FILE_MARKER: &str = "+++ ";

/// Line-number cursors for the removed and added sides of the current hunk.
#[derive(Debug, Clone, Copy, Default)]
struct HunkCursor {
    removed: Option<usize>,
    added: Option<usize>,
}

impl HunkCursor {
    fn from_captures(caps: &Captures<'_>) -> Self {
        Self {
            removed: caps[1].parse().ok(),
            added: caps[2].parse().ok(),
        }
    }

    /// Returns the current number and advances the cursor. A cursor that
    /// would overflow drops to `None`.
    fn take(slot: &mut Option<usize>) -> Option<usize> {
        let current = *slot;
        *slot = current.and_then(|n| n.checked_add(1));
        current
    }

    fn next_added(&mut self) -> Option<usize> {
        Self::take(&mut self.added)
    }

    fn next_removed(&mut self) -> Option<usize> {
        Self::take(&mut self.removed)
    }

    fn skip_context(&mut self) {
        Self::take(&mut self.added);
        Self::take(&mut self.removed);
    }
}

/// Splits unified diff text (git or svn) into per-file added/removed lines.
///
/// The parser does not validate the diff. Anything that is not a file header,
/// a content line, or a hunk header is ignored.
pub struct DiffParser {
    hunk_pattern: Regex,
}

impl Default for DiffParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            hunk_pattern: Regex::new(r"^@@ -(\d+)(?:,\d+)? \+(\d+)(?:,\d+)? @@")
                .expect("Invalid regex"),
        }
    }

    /// Parse a patch into one [`FileDiff`] per file header, in header order.
    ///
    /// # Errors
    /// - [`DiffSlocError::MalformedDiff`] if a `+`/`-` content line appears
    ///   before the first file header.
    /// - [`DiffSlocError::MissingFileName`] if a file header has no usable file name.
    /// - [`DiffSlocError::EmptyInput`] if the patch contains no file header.
    pub fn parse(&self, patch: &str) -> Result<Vec<FileDiff>> {
        let mut files = Vec::new();
        let mut current: Option<FileDiff> = None;
        let mut cursor = HunkCursor::default();

        for (idx, line) in patch.lines().enumerate() {
            let line_number = idx + 1;

            if let Some(target) = header_target(line) {
                let next = file_from_header(line, target, line_number)?;
                if let Some(finished) = current.replace(next) {
                    files.push(finished);
                }
                cursor = HunkCursor::default();
            } else if let Some(text) = added_content(line) {
                let file = active_file(&mut current, line_number, line)?;
                file.added.push(DiffLine::new(cursor.next_added(), text));
            } else if let Some(text) = removed_content(line) {
                let file = active_file(&mut current, line_number, line)?;
                file.removed.push(DiffLine::new(cursor.next_removed(), text));
            } else if let Some(caps) = self.hunk_pattern.captures(line) {
                cursor = HunkCursor::from_captures(&caps);
            } else if line.is_empty() || line.starts_with(' ') {
                cursor.skip_context();
            }
        }

        let last = current.ok_or(DiffSlocError::EmptyInput)?;
        files.push(last);
        Ok(files)
    }
}

/// Parse a patch with a default [`DiffParser`].
///
/// # Errors
/// See [`DiffParser::parse`].
pub fn parse(patch: &str) -> Result<Vec<FileDiff>> {
    DiffParser::new().parse(patch)
}

/// Returns the text after the header keyword if `line` is a file header.
fn header_target(line: &str) -> Option<&str> {
    line.strip_prefix(SVN_HEADER)
        .or_else(|| line.strip_prefix(GIT_HEADER))
}

fn added_content(line: &str) -> Option<&str> {
    if line.starts_with(TO_FILE_MARKER) {
        return None;
    }
    line.strip_prefix('+')
}

fn removed_content(line: &str) -> Option<&str> {
    if line.starts_with(FROM_FILE_MARKER) {
        return None;
    }
    line.strip_prefix('-')
}

fn active_file<'a>(
    current: &'a mut Option<FileDiff>,
    line_number: usize,
    line: &str,
) -> Result<&'a mut FileDiff> {
    current.as_mut().ok_or_else(|| DiffSlocError::MalformedDiff {
        line_number,
        line: line.to_string(),
    })
}

/// The header's last whitespace-separated token is the target path; the file
/// name is its last `/` segment.
fn file_from_header(line: &str, target: &str, line_number: usize) -> Result<FileDiff> {
    let path = target.split_whitespace().next_back().unwrap_or_default();
    let filename = path.rsplit('/').next().unwrap_or_default();

    if filename.is_empty() {
        return Err(DiffSlocError::MissingFileName {
            line_number,
            line: line.to_string(),
        });
    }

    Ok(FileDiff::new(filename, path))
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
