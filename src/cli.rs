use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "diff-sloc")]
#[command(author, version, about = "A code line counter for diffs")]
#[command(long_about = "Counts added and removed code, comment and blank lines per file \
    in a git or svn unified diff.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Unreadable or malformed patch\n  \
    2 - Configuration error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// A git diff or svn diff file (reads standard input when omitted or `-`)
    #[arg(value_name = "PATCHFILE")]
    pub patch: Option<PathBuf>,

    /// Count only added lines
    #[arg(long)]
    pub only_add: bool,

    /// Print only total counts
    #[arg(long)]
    pub only_total: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// The patch file to read, or `None` for standard input.
    #[must_use]
    pub fn patch_path(&self) -> Option<&Path> {
        self.patch
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
