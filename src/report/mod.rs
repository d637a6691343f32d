//! Per-file and total line counts for a parsed patch.

use crate::counter::{LineCounter, LineCounts};
use crate::diff::{DiffParser, FileDiff};
use crate::error::Result;
use crate::language::{LanguageRegistry, LanguageTag};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Skip counting removed lines.
    pub only_add: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub filename: String,
    /// Path as written in the file header.
    pub path: String,
    pub language: LanguageTag,
    pub added: LineCounts,
    /// `None` when removed lines are not counted.
    pub removed: Option<LineCounts>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    pub files: Vec<FileReport>,
    pub total_added: LineCounts,
    pub total_removed: Option<LineCounts>,
}

impl DiffReport {
    #[must_use]
    pub fn from_diffs(
        diffs: &[FileDiff],
        registry: &LanguageRegistry,
        options: ReportOptions,
    ) -> Self {
        let files: Vec<FileReport> = diffs
            .iter()
            .map(|diff| {
                let language = registry.classify(&diff.filename);
                let counter = LineCounter::new(language);
                let removed = (!options.only_add).then(|| counter.count(diff.removed_text()));
                FileReport {
                    filename: diff.filename.clone(),
                    path: diff.path.clone(),
                    language,
                    added: counter.count(diff.added_text()),
                    removed,
                }
            })
            .collect();

        let total_added = files
            .iter()
            .map(|f| f.added)
            .fold(LineCounts::default(), |a, b| a + b);
        let total_removed = (!options.only_add).then(|| {
            files
                .iter()
                .filter_map(|f| f.removed)
                .fold(LineCounts::default(), |a, b| a + b)
        });

        Self {
            files,
            total_added,
            total_removed,
        }
    }

    /// Length in characters of the longest file name, or 0 for an empty report.
    #[must_use]
    pub fn longest_filename(&self) -> usize {
        self.files
            .iter()
            .map(|f| f.filename.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Parse a patch and count its lines.
///
/// # Errors
/// Returns an error if the patch is malformed or contains no file header.
pub fn analyze(
    patch: &str,
    registry: &LanguageRegistry,
    options: ReportOptions,
) -> Result<DiffReport> {
    let diffs = DiffParser::new().parse(patch)?;
    Ok(DiffReport::from_diffs(&diffs, registry, options))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
