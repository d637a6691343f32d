pub mod cli;
pub mod config;
pub mod counter;
pub mod diff;
pub mod error;
pub mod language;
pub mod output;
pub mod report;

pub use error::{DiffSlocError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code for a failed run.
#[must_use]
pub const fn exit_code_for(err: &DiffSlocError) -> i32 {
    if err.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_INPUT_ERROR
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
