use anyhow::{Context, Result};
use note_press_config::{Config, OnError};
use note_press_engine::{FailurePolicy, SiteBuilder, WrittenNote};
use std::{env, path::PathBuf, process};

/// Where the notes root came from, for error messages.
#[derive(Debug, PartialEq, Eq)]
enum RootSource {
    Argument,
    ConfigFile,
    ExecutableDir,
}

fn failure_policy(on_error: OnError) -> FailurePolicy {
    match on_error {
        OnError::Halt => FailurePolicy::Halt,
        OnError::Continue => FailurePolicy::Continue,
    }
}

/// Console line printed after each page is written.
fn completion_notice(note: &WrittenNote) -> String {
    format!("Wrote note at {}", note.directory().display())
}

/// Pick the notes root: CLI argument, then config file, then the directory
/// holding this executable.
fn resolve_root(arg: Option<PathBuf>, config: &Config) -> Result<(PathBuf, RootSource)> {
    if let Some(root) = arg {
        return Ok((root, RootSource::Argument));
    }
    if let Some(root) = &config.root {
        return Ok((root.clone(), RootSource::ConfigFile));
    }

    let exe = env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe
        .parent()
        .map(PathBuf::from)
        .context("Executable path has no parent directory")?;
    Ok((dir, RootSource::ExecutableDir))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [notes-root]", args[0]);
        process::exit(1);
    }

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());
    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let (root, from) = resolve_root(args.get(1).map(PathBuf::from), &config)?;
    log::info!("Building notes under {} ({from:?})", root.display());

    let builder = SiteBuilder::new().with_policy(failure_policy(config.on_error));
    let report = match builder.build_with(&root, |note| {
        println!("{}", completion_notice(note));
    }) {
        Ok(report) => report,
        Err(e) => {
            let source = if from == RootSource::ConfigFile {
                format!(" (root from config file '{}')", config_path.display())
            } else {
                String::new()
            };
            eprintln!("Error: {e}{source}");
            process::exit(1);
        }
    };

    if !report.is_clean() {
        for failure in &report.failures {
            eprintln!("Error: {}", failure.error);
        }
        eprintln!(
            "{} of {} notes failed to convert",
            report.failures.len(),
            report.failures.len() + report.written.len()
        );
        process::exit(1);
    }

    log::info!("Converted {} notes", report.written.len());
    Ok(())
}
