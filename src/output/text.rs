use std::fmt::Write;

use crate::counter::LineCounts;
use crate::error::Result;
use crate::report::DiffReport;

use super::OutputFormatter;

/// Minimum width of the name column; fits the `Total` label.
const MIN_NAME_WIDTH: usize = 5;

/// Fixed-width table with one `+` row (and `-` row) per file and a `Total` row.
///
/// ```text
/// Name    Code Comment Blank
/// --------------------------
/// a.py  +    1       0     1
///       -    0       0     0
/// --------------------------
/// Total +    1       0     1
///       -    0       0     0
/// ```
pub struct TextFormatter {
    only_total: bool,
}

impl TextFormatter {
    #[must_use]
    pub const fn new(only_total: bool) -> Self {
        Self { only_total }
    }

    fn name_width(&self, report: &DiffReport) -> usize {
        if self.only_total {
            MIN_NAME_WIDTH
        } else {
            report.longest_filename().max(MIN_NAME_WIDTH)
        }
    }
}

struct Table {
    output: String,
    width: usize,
}

impl Table {
    fn row(&mut self, name: &str, sign: char, code: &str, comment: &str, blank: &str) {
        let width = self.width;
        let _ = writeln!(
            self.output,
            "{name:<width$} {sign} {code:>4} {comment:>7} {blank:>5}"
        );
    }

    fn counts(&mut self, name: &str, sign: char, counts: LineCounts) {
        self.row(
            name,
            sign,
            &counts.code.to_string(),
            &counts.comment.to_string(),
            &counts.blank.to_string(),
        );
    }

    fn rule(&mut self, len: usize) {
        let _ = writeln!(self.output, "{}", "-".repeat(len));
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &DiffReport) -> Result<String> {
        let mut table = Table {
            output: String::new(),
            width: self.name_width(report),
        };

        table.row("Name", ' ', "Code", "Comment", "Blank");
        let rule_len = table.output.trim_end_matches('\n').chars().count();
        table.rule(rule_len);

        if !self.only_total {
            for file in &report.files {
                table.counts(&file.filename, '+', file.added);
                if let Some(removed) = file.removed {
                    table.counts("", '-', removed);
                }
            }
            table.rule(rule_len);
        }

        table.counts("Total", '+', report.total_added);
        if let Some(removed) = report.total_removed {
            table.counts("", '-', removed);
        }

        Ok(table.output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
