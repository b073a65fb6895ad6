use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the fallible parts of this crate.
///
/// Extraction, validation and rendering never fail with an `Error`: they
/// report their outcome through status enums. Only loading configuration
/// can go wrong in a way the caller has to handle.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The configuration document is not valid TOML or has unknown fields.
    #[error("failed to parse email input config: {source}")]
    Parse {
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
    /// A session key was configured but is empty.
    #[error("invalid session key for `{0}`: must not be empty")]
    InvalidSessionKey(&'static str),
}

/// Result alias for this crate's fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
