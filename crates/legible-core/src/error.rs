//! Error types for legible-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A setting was present but out of range.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Name of the setting.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building a [`LexiconSet`](crate::lexicon::LexiconSet).
///
/// These only surface at construction time. Once a lexicon exists it is
/// immutable and every analysis against it is infallible.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// A word list file could not be read.
    #[error("failed to read word list {path}")]
    Read {
        /// Path of the word list.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The word list contained no entries.
    #[error("word list {origin} has no entries")]
    Empty {
        /// Where the list came from (a path, or `built-in`).
        origin: String,
    },

    /// An entry contained characters that can never match a word token.
    #[error("word list {origin}, line {line}: invalid entry {entry:?}")]
    InvalidEntry {
        /// Where the list came from (a path, or `built-in`).
        origin: String,
        /// 1-based line number of the entry.
        line: usize,
        /// The offending entry.
        entry: String,
    },
}

/// Result type alias using [`LexiconError`].
pub type LexiconResult<T> = Result<T, LexiconError>;
