//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `seqname`.
#[derive(Debug, Parser)]
#[command(name = "seqname", version, about = "Generate grouped sequential names")]
pub struct Cli {
    /// YAML or JSON file with default options and groups.
    #[arg(long, global = true, env = "SEQNAME_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the next names from a group.
    Next(NextArgs),
    /// List configured groups and the options they format with.
    Groups,
}

/// Arguments for `seqname next`.
#[derive(Debug, Args)]
pub struct NextArgs {
    /// Group to draw from. Unknown groups use "default".
    pub group: Option<String>,

    /// How many names to print.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Zero-padding width for this call.
    #[arg(long, conflicts_with = "contexts")]
    pub digits: Option<usize>,

    /// Derive the width from this expected maximum.
    #[arg(long, conflicts_with = "contexts")]
    pub auto: Option<u64>,

    /// Prefix for this call.
    #[arg(long, conflicts_with = "contexts")]
    pub prefix: Option<String>,

    /// JSON context handed to the override, one name per context.
    #[arg(long = "context", value_name = "JSON", conflicts_with_all = ["group", "count"])]
    pub contexts: Vec<String>,

    /// Context key whose value becomes the name when present. Repeat to
    /// try several keys in order.
    #[arg(long = "id-field", value_name = "KEY")]
    pub id_fields: Vec<String>,
}
