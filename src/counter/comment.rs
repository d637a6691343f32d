//! Line-local comment heuristic.
//!
//! A line is a comment when, after stripping leading spaces and tabs, it
//! starts with one of its language's comment markers. The check never looks
//! at neighbouring lines, so the body of a block comment that does not start
//! with a marker counts as code.

use crate::language::LanguageTag;

/// How a language decides whether a line is a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentRule {
    /// Comment when the trimmed line starts with any of the markers.
    Prefixes(&'static [&'static str]),
    /// Every line is a comment (prose files).
    Always,
    /// No line is a comment.
    Never,
}

impl CommentRule {
    #[must_use]
    pub const fn for_language(tag: LanguageTag) -> Self {
        match tag {
            LanguageTag::CFamily | LanguageTag::Java => Self::Prefixes(&["/*", "*", "*/", "//"]),
            LanguageTag::Shell | LanguageTag::Perl | LanguageTag::Ruby => Self::Prefixes(&["#"]),
            LanguageTag::Python => Self::Prefixes(&["\"\"\"", "'''", "#"]),
            LanguageTag::Xml => Self::Prefixes(&["<!--", "-->"]),
            LanguageTag::Text => Self::Always,
            LanguageTag::Default => Self::Never,
        }
    }
}

pub struct CommentDetector {
    rule: CommentRule,
}

impl CommentDetector {
    #[must_use]
    pub const fn new(tag: LanguageTag) -> Self {
        Self {
            rule: CommentRule::for_language(tag),
        }
    }

    #[must_use]
    pub fn is_comment(&self, line: &str) -> bool {
        match self.rule {
            CommentRule::Prefixes(markers) => {
                let trimmed = line.trim_start_matches([' ', '\t']);
                markers.iter().any(|marker| trimmed.starts_with(marker))
            }
            CommentRule::Always => true,
            CommentRule::Never => false,
        }
    }
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
