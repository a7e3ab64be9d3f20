//! Error types for the entrymap library
//!
//! This module defines the error handling surface for entry-map construction,
//! using thiserror for ergonomic error definitions.

use thiserror::Error;

/// Main error type for entry-map construction
#[derive(Error, Debug)]
pub enum Error {
    /// A sequence element is null or not a composite value.
    ///
    /// The message wording matches the convention host engines use when a
    /// map constructor receives a malformed entry, so callers asserting on
    /// that exact text keep working.
    #[error("Iterator value {index} is not an entry object")]
    NotAnEntry {
        /// Zero-based position of the offending element
        index: usize,
    },

    /// An entry key is present but is not a string.
    ///
    /// Non-string keys are rejected rather than coerced so that listing the
    /// result mapping's own entries always reproduces the entry list that
    /// built it.
    #[error("Entry object key must be a string")]
    NonStringKey,

    /// A dynamic entry source is neither null nor an array.
    ///
    /// Array-like values without iteration capability are rejected here, not
    /// coerced element-by-element or treated as empty.
    #[error("Entry source of type {json_type} is not iterable")]
    NotIterable {
        /// JSON type name of the rejected source
        json_type: &'static str,
    },

    /// JSON parsing errors from the text-based entry loader
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
