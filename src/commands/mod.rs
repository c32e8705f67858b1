//! Command dispatch and handlers.

pub mod groups;
pub mod next;

use std::path::Path;

use crate::cli::{Cli, Command};
use crate::options::GeneratorConfig;

/// Dispatch a parsed command to its handler, printing its output.
///
/// # Errors
///
/// Returns an error string if the config cannot be loaded or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = load_config(cli.config.as_deref())?;

    let lines = match &cli.command {
        Command::Next(args) => next::run(args, config)?,
        Command::Groups => groups::run(config),
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Loads the config file when one is given, else an empty config.
fn load_config(path: Option<&Path>) -> Result<GeneratorConfig, String> {
    match path {
        Some(path) => GeneratorConfig::load(path).map_err(|e| e.to_string()),
        None => Ok(GeneratorConfig::default()),
    }
}
