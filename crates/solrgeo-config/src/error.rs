//! Error types for solrgeo configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// The show-action list resolved to nothing.
    #[error("show_actions must list at least one action name")]
    EmptyShowActions,

    /// A Solr field name resolved to an empty string.
    #[error("field name for '{field}' must not be empty")]
    EmptyFieldName {
        /// Which configured field was empty.
        field: &'static str,
    },
}
