use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("corpus path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to list corpus directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IDF is ln(D / f) and has no value when the collection holds no entities.
    #[error("cannot compute IDF over an empty collection")]
    EmptyCollection,
}

pub type Result<T> = std::result::Result<T, Error>;
