use serde::Serialize;

use crate::counter::LineCounts;
use crate::error::Result;
use crate::language::LanguageTag;
use crate::report::DiffReport;

use super::OutputFormatter;

pub struct JsonFormatter {
    only_total: bool,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new(only_total: bool) -> Self {
        Self { only_total }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<Vec<JsonFile<'a>>>,
    total: JsonSides,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    filename: &'a str,
    language: LanguageTag,
    #[serde(flatten)]
    counts: JsonSides,
}

#[derive(Serialize)]
struct JsonSides {
    added: LineCounts,
    removed: Option<LineCounts>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &DiffReport) -> Result<String> {
        let files = (!self.only_total).then(|| {
            report
                .files
                .iter()
                .map(|file| JsonFile {
                    filename: &file.filename,
                    language: file.language,
                    counts: JsonSides {
                        added: file.added,
                        removed: file.removed,
                    },
                })
                .collect()
        });

        let output = JsonOutput {
            files,
            total: JsonSides {
                added: report.total_added,
                removed: report.total_removed,
            },
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
