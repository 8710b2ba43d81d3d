//! Scripted and interactive shopper sessions.

use std::io::BufRead;
use std::path::Path;

use mahatta_core::Storefront;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::commands::{emit, open_storefront};
use crate::config::CliConfig;
use crate::script::{Line, ScriptError, parse_line};

/// A script line that failed to parse.
#[derive(Debug, Error)]
#[error("line {line}: {source}")]
pub struct LineError {
    pub line: usize,
    #[source]
    pub source: ScriptError,
}

/// Run a script file, printing the view on each `show` and once at the end.
///
/// # Errors
///
/// Returns an error on the first unparseable line, or if the catalog cannot
/// be loaded or a view cannot be written.
pub fn run_script(
    config: &CliConfig,
    path: &Path,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("Script not found: {}", path.display()).into());
    }
    let content = std::fs::read_to_string(path)?;
    let mut store = open_storefront(config)?;

    let mut applied = 0_usize;
    for (index, text) in content.lines().enumerate() {
        let parsed = parse_line(text).map_err(|source| LineError {
            line: index + 1,
            source,
        })?;
        match parsed {
            Some(Line::Action(action)) => {
                if store.dispatch(action) {
                    applied += 1;
                }
            }
            Some(Line::Show) => emit(&store.snapshot()?, compact)?,
            None => {}
        }
    }

    info!(path = %path.display(), applied, "Script complete");
    emit(&store.snapshot()?, compact)
}

/// Read actions from stdin and print the view after each one.
///
/// Bad lines are logged and skipped.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, stdin cannot be read,
/// or a view cannot be written.
pub fn repl(config: &CliConfig, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_storefront(config)?;
    emit(&store.snapshot()?, compact)?;

    for (index, text) in std::io::stdin().lock().lines().enumerate() {
        let text = text?;
        match parse_line(&text) {
            Ok(Some(line)) => step(&mut store, line, compact)?,
            Ok(None) => {}
            Err(e) => warn!(line = index + 1, "{e}"),
        }
    }

    info!("Session ended");
    Ok(())
}

fn step(store: &mut Storefront, line: Line, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    if let Line::Action(action) = line {
        let changed = store.dispatch(action);
        debug!(changed, "Action applied");
    }
    emit(&store.snapshot()?, compact)
}
