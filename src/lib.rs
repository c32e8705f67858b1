//! Grouped sequential name generation.
//!
//! A [`Generator`] hands out names like `001`, `002`, `Page-00001` from
//! independent per-group counters, after first giving an optional
//! [`NameOverride`] the chance to name the item itself.
//!
//! ```
//! use seqname::{Generator, GeneratorConfig, GroupOptions};
//!
//! let config = GeneratorConfig::default()
//!     .group("page", GroupOptions::new().digits(5).prefix("Page-"));
//! let mut names = Generator::with_options(config);
//!
//! assert_eq!(names.next(()), "001");
//! assert_eq!(names.next("page"), "Page-00001");
//! ```

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod error;
pub mod format;
pub mod generator;
pub mod options;
pub mod ports;

pub use error::GeneratorError;
pub use generator::{Generator, Group, Request, DEFAULT_GROUP};
pub use options::{GeneratorConfig, GroupOptions, ResolvedOptions};
pub use ports::{NameOverride, NoOverride};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}
