use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffSlocError {
    #[error("Malformed diff at line {line_number}: content line before any file header: {line:?}")]
    MalformedDiff { line_number: usize, line: String },

    #[error("Malformed diff at line {line_number}: file header has no file name: {line:?}")]
    MissingFileName { line_number: usize, line: String },

    #[error("No file header found in patch (expected `diff --git ` or `Index: `)")]
    EmptyInput,

    #[error("Failed to read patch file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl DiffSlocError {
    /// Short, stable name of the error category.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::MalformedDiff { .. } | Self::MissingFileName { .. } => "MalformedDiff",
            Self::EmptyInput => "EmptyInput",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::ConfigRead { .. } | Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// Whether the error comes from the configuration layer rather than the input.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigRead { .. } | Self::Config(_) | Self::TomlParse(_)
        )
    }

    /// A hint for the user on how to fix the error, if one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MalformedDiff { .. } => {
                Some("Make sure the input is a unified diff produced by `git diff` or `svn diff`")
            }
            Self::MissingFileName { .. } => {
                Some("The file header must end with the path of the changed file")
            }
            Self::EmptyInput => Some("Check that the patch is not empty and was not truncated"),
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the patch file path exists"),
                std::io::ErrorKind::PermissionDenied => {
                    Some("Check that the patch file is readable")
                }
                _ => None,
            },
            Self::ConfigRead { .. } => Some("Check the --config path, or pass --no-config"),
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format (see `.diff-sloc.toml`)")
            }
            Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DiffSlocError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
