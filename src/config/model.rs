use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DiffSlocError, Result};
use crate::language::{LanguageRegistry, LanguageTag};
use crate::output::OutputFormat;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config schema version. Optional; only "1" is accepted.
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub output: OutputConfig,

    /// Extra extension → language tag mappings, checked before the built-ins.
    #[serde(default)]
    pub languages: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Count only added lines.
    #[serde(default)]
    pub only_add: bool,

    /// Print only the total rows.
    #[serde(default)]
    pub only_total: bool,

    /// Output format: "text" or "json".
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Check every value that serde cannot check on its own.
    ///
    /// # Errors
    /// Returns [`DiffSlocError::Config`] on an unsupported version, an unknown
    /// output format, a malformed extension or an unknown language tag.
    pub fn validate(&self) -> Result<()> {
        if let Some(version) = &self.version
            && version != CONFIG_VERSION
        {
            return Err(DiffSlocError::Config(format!(
                "Unsupported config version '{version}'. Only version '{CONFIG_VERSION}' is supported."
            )));
        }
        self.output_format()?;
        self.custom_extensions()?;
        Ok(())
    }

    /// # Errors
    /// Returns [`DiffSlocError::Config`] if `output.format` is not a known format.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .format
            .as_deref()
            .map(|name| name.parse().map_err(DiffSlocError::Config))
            .transpose()
    }

    /// # Errors
    /// Returns [`DiffSlocError::Config`] for an invalid extension or an unknown tag.
    pub fn custom_extensions(&self) -> Result<IndexMap<String, LanguageTag>> {
        self.languages
            .iter()
            .map(|(ext, tag)| -> Result<(String, LanguageTag)> {
                validate_extension(ext)?;
                let tag = tag
                    .parse::<LanguageTag>()
                    .map_err(|e| DiffSlocError::Config(format!("languages.{ext}: {e}")))?;
                Ok((ext.clone(), tag))
            })
            .collect()
    }

    /// # Errors
    /// See [`Config::custom_extensions`].
    pub fn language_registry(&self) -> Result<LanguageRegistry> {
        Ok(LanguageRegistry::with_custom_extensions(
            &self.custom_extensions()?,
        ))
    }
}

fn validate_extension(ext: &str) -> Result<()> {
    if ext.is_empty() || ext.contains('.') || ext.chars().any(char::is_whitespace) {
        return Err(DiffSlocError::Config(format!(
            "Invalid extension '{ext}' in [languages]: use the bare extension, e.g. 'hpp'"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
