//! Error types for index loading and configuration.

use std::path::PathBuf;

/// Failure to obtain a usable search index.
///
/// Any of these leaves the widget inert; the caller decides whether to log or exit.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The index could not be retrieved (network, filesystem).
    #[error("could not fetch search index: {0}")]
    Fetch(String),

    /// The body was not valid JSON.
    #[error("search index is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON, but the top-level value was not an array of records.
    #[error("search index must be a JSON array, found {0}")]
    NotAnArray(&'static str),
}

/// Failure to read or apply widget configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for `{key}`: {value}")]
    InvalidValue { key: String, value: String },
}
