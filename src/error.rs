// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("malformed corpus entry {name:?} (expected <digits>.html)")]
    MalformedIdentifier { name: String },

    #[error("corpus is empty: nothing to analyze")]
    EmptyCorpus,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("corpus walk error: {0}")]
    Walk(String),
}

pub type Result<T> = std::result::Result<T, RankError>;

// Allow `?` on std::io::Error by converting to RankError::Io with unknown path.
impl From<std::io::Error> for RankError {
    fn from(source: std::io::Error) -> Self {
        RankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for RankError {
    fn from(e: walkdir::Error) -> Self {
        RankError::Walk(e.to_string())
    }
}
