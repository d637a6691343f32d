use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::language::LanguageTag;

use super::CommentDetector;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineCounts {
    #[must_use]
    pub const fn new(code: usize, comment: usize, blank: usize) -> Self {
        Self {
            code,
            comment,
            blank,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.code + self.comment + self.blank
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.code += rhs.code;
        self.comment += rhs.comment;
        self.blank += rhs.blank;
    }
}

impl Add for LineCounts {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Partitions lines into code, comment and blank.
///
/// Blank wins over comment, so an empty line in a prose file is blank.
/// Code is whatever is left over.
pub struct LineCounter {
    detector: CommentDetector,
}

impl LineCounter {
    #[must_use]
    pub const fn new(tag: LanguageTag) -> Self {
        Self {
            detector: CommentDetector::new(tag),
        }
    }

    #[must_use]
    pub fn count<I, S>(&self, lines: I) -> LineCounts
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total = 0;
        let mut comment = 0;
        let mut blank = 0;

        for line in lines {
            let line = line.as_ref();
            total += 1;

            if line.trim().is_empty() {
                blank += 1;
            } else if self.detector.is_comment(line) {
                comment += 1;
            }
        }

        LineCounts {
            code: total - comment - blank,
            comment,
            blank,
        }
    }
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
