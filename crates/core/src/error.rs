use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejection produced while turning query parameters into a [`crate::ViewerFilter`].
///
/// Every variant is the caller's fault and maps to `400 Bad Request`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid number of parameters: {0}")]
    TooManyParameters(usize),

    #[error("invalid number of values for parameter {key}: {count}")]
    InvalidValueCount { key: String, count: usize },

    #[error("{0} is not an integer")]
    NotAnInteger(String),

    #[error("{0} is not a valid id, ids are non-negative")]
    NegativeId(String),

    #[error("unknown parameter {0}, expected id or name")]
    UnknownParameter(String),
}

/// Startup failures while loading the configuration file. All are fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("the port must be between 1 and 65535, got {0}")]
    InvalidPort(i64),

    #[error("db_connection_string must not be empty")]
    MissingConnectionString,
}
