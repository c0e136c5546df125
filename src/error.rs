// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostarError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid cast index: {0}")]
    CastIndex(#[from] serde_json::Error),

    #[error("Invalid ratings table: {0}")]
    Ratings(#[from] csv::Error),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CostarError>;

// Allow `?` on std::io::Error by converting to CostarError::Io with unknown path.
impl From<std::io::Error> for CostarError {
    fn from(source: std::io::Error) -> Self {
        CostarError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
