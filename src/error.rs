//! Error type for generator construction and configuration.

use std::path::PathBuf;

/// Errors surfaced by the library.
///
/// Name generation itself never fails; these cover group creation and
/// loading configuration from outside the process.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A group was created with an empty name.
    #[error("group name must not be empty")]
    EmptyGroupName,

    /// Configuration could not be parsed.
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A context argument was not valid JSON.
    #[error("invalid context {input:?}: {reason}")]
    InvalidContext {
        /// The raw text given as context.
        input: String,
        /// Parser message.
        reason: String,
    },
}
