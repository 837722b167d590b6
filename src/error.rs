use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output root exists but is not a directory: {0}")]
    RootNotADirectory(PathBuf),

    #[error("Fixture missing: {0}")]
    Missing(PathBuf),

    #[error("Fixture is not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("Content mismatch in {path}: expected {expected:?}, found {actual:?}")]
    ContentMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("Size mismatch in {path}: expected {expected} bytes, found {actual} bytes")]
    SizeMismatch {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("Unexpected entry in fixture directory: {0}")]
    UnexpectedEntry(PathBuf),

    #[error("Walkdir error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl FixtureError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixtureError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
