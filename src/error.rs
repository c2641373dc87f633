// Error kinds for the classification core.
//
// DocumentError is scoped to a single document: callers skip the document
// and keep going. ConfigurationError means the topic registry itself is
// unusable and is always surfaced to the caller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single document produced no bigram set.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document could not be opened or decoded.
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Fewer than two tokens survived normalization and stop-word removal.
    #[error("only {tokens} usable token(s), at least 2 are needed for a bigram")]
    Degenerate { tokens: usize },
}

/// The topic registry cannot be used for classification.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("topic registry is empty")]
    Empty,

    #[error("{names} topic name(s) but {signatures} signature(s)")]
    LengthMismatch { names: usize, signatures: usize },

    #[error("topic {0:?} appears more than once in the registry")]
    DuplicateTopic(String),

    #[error("stop-word file {0} does not exist")]
    MissingStopWords(PathBuf),
}
