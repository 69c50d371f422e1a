//! Error type shared by every import, lookup, and dispatch operation.

use crate::datasets::SourceColumn;
use thiserror::Error;

/// Errors raised by the data store and its importers.
///
/// The library never prints or exits on these; callers decide how to report
/// them.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong field count, unparsable number or year, missing JSON field,
    /// or a stream that could not be read.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Lookup of an unknown authority code, year, language, or measure.
    #[error("no {kind} found matching {key}")]
    NotFound { kind: &'static str, key: String },

    /// The column mapping has fewer entries than the source type requires.
    #[error("column mapping for {source_type} needs at least {required} entries, got {actual}")]
    InvalidMapping {
        source_type: String,
        required: usize,
        actual: usize,
    },

    /// The column mapping lacks a role the importer needs.
    #[error("column mapping has no entry for {0:?}")]
    MissingColumn(SourceColumn),

    /// A measure was stored under a codename other than its own.
    #[error("measure {codename:?} cannot be stored under {key:?}")]
    CodenameMismatch { key: String, codename: String },

    /// The source-type tag is not one of the known parsers.
    #[error("unsupported source type: {0}")]
    UnsupportedSourceType(String),
}

impl Error {
    pub(crate) fn not_found(kind: &'static str, key: impl ToString) -> Self {
        Error::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedInput(msg.into())
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::MalformedInput(format!("csv: {e}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::MalformedInput(format!("json: {e}"))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::MalformedInput(format!("read failed: {e}"))
    }
}

/// Library result alias.
pub type Result<T> = std::result::Result<T, Error>;
