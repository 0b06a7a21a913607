// File: src/error.rs
use thiserror::Error;

/// Errors surfaced by the dictionary engine and its snapshot codec.
///
/// A query that finds nothing is not an error: `search` returns an empty list.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary index has not been built")]
    NotBuilt,

    #[error("unknown search type '{0}': expected begin, full, end or some")]
    UnknownSearchType(String),

    #[error("unknown language key '{0}'")]
    UnknownLanguage(String),

    #[error("unknown flavorisation type '{0}'")]
    UnknownFlavorisation(String),

    #[error("invalid snapshot key '{0}'")]
    InvalidSnapshotKey(String),

    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("snapshot json failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
