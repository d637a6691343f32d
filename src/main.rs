use std::fs;
use std::io::{IsTerminal, Read};
use std::path::Path;

use clap::Parser;

use diff_sloc::cli::Cli;
use diff_sloc::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use diff_sloc::output::{Diagnostics, OutputFormat};
use diff_sloc::report::{DiffReport, ReportOptions, analyze};
use diff_sloc::{DiffSlocError, EXIT_SUCCESS, exit_code_for};

fn main() {
    let cli = Cli::parse();
    let diagnostics = Diagnostics::new(cli.color.into(), cli.verbose, cli.quiet);

    let exit_code = match run(&cli, &diagnostics) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            diagnostics.error(&e);
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

/// Flags from the command line layered over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunSettings {
    only_add: bool,
    only_total: bool,
    format: OutputFormat,
}

fn run(cli: &Cli, diagnostics: &Diagnostics) -> diff_sloc::Result<()> {
    // 1. Load configuration
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    if let Some(source) = &loaded.source {
        diagnostics.info(1, &format!("Using config file {}", source.display()));
    }
    let config = loaded.config;

    // 2. Apply CLI argument overrides
    let settings = resolve_settings(cli, &config)?;
    let registry = config.language_registry()?;

    // 3. Read and analyze the patch
    let patch = read_patch(cli.patch_path(), diagnostics)?;
    let report = analyze(
        &patch,
        &registry,
        ReportOptions {
            only_add: settings.only_add,
        },
    )?;
    log_report(&report, diagnostics);

    // 4. Render
    let rendered = settings
        .format
        .formatter(settings.only_total)
        .format(&report)?;
    write_output(cli.output.as_deref(), &rendered)
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> diff_sloc::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

fn resolve_settings(cli: &Cli, config: &Config) -> diff_sloc::Result<RunSettings> {
    let format = match cli.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };

    Ok(RunSettings {
        only_add: cli.only_add || config.output.only_add,
        only_total: cli.only_total || config.output.only_total,
        format,
    })
}

/// Patches are not guaranteed to be UTF-8; invalid bytes are replaced rather
/// than rejected.
fn read_patch(path: Option<&Path>, diagnostics: &Diagnostics) -> diff_sloc::Result<String> {
    let bytes = if let Some(path) = path {
        diagnostics.info(1, &format!("Reading patch from {}", path.display()));
        fs::read(path).map_err(|source| DiffSlocError::FileRead {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            diagnostics.warning("Reading patch from standard input (end with Ctrl-D)");
        } else {
            diagnostics.info(1, "Reading patch from standard input");
        }
        let mut buf = Vec::new();
        stdin.lock().read_to_end(&mut buf)?;
        buf
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn log_report(report: &DiffReport, diagnostics: &Diagnostics) {
    diagnostics.info(1, &format!("Parsed {} file(s)", report.files.len()));
    for file in &report.files {
        let removed = file
            .removed
            .map_or_else(|| "-".to_string(), |counts| counts.total().to_string());
        diagnostics.info(
            2,
            &format!(
                "  {} [{}]: +{} -{}",
                file.path,
                file.language,
                file.added.total(),
                removed
            ),
        );
    }
}

fn write_output(output_path: Option<&Path>, content: &str) -> diff_sloc::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
