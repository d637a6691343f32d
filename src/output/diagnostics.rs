//! Stderr diagnostics: errors, warnings, and verbosity-gated progress notes.
//!
//! Format: `✖ {error_type}: {message}` / `  help: {suggestion}`

use std::io::{IsTerminal, Write};

use crate::error::DiffSlocError;

use super::{ColorMode, ansi};

pub struct Diagnostics {
    use_colors: bool,
    verbose: u8,
    quiet: bool,
}

impl Diagnostics {
    #[must_use]
    pub fn new(mode: ColorMode, verbose: u8, quiet: bool) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
            quiet,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // https://no-color.org: presence of the variable disables color
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::stderr().is_terminal()
            }
        }
    }

    pub fn error(&self, err: &DiffSlocError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, err);
    }

    pub fn warning(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message);
    }

    /// Print `message` when running with at least `level` `-v` flags.
    pub fn info(&self, level: u8, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_info(&mut stderr, level, message);
    }

    /// Errors are written even in quiet mode.
    pub fn write_error<W: Write>(&self, w: &mut W, err: &DiffSlocError) {
        // Write failures on stderr are ignored; there is nowhere left to report them.
        let error_type = err.error_type();
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {err}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {err}");
        }

        if let Some(source) = std::error::Error::source(err) {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {source}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {source}");
            }
        }

        if let Some(s) = err.suggestion() {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
    }

    pub fn write_info<W: Write>(&self, w: &mut W, level: u8, message: &str) {
        if self.quiet || self.verbose < level {
            return;
        }
        let _ = writeln!(w, "{message}");
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool, verbose: u8, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
