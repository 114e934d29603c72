use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading instances and writing solutions.
#[derive(Debug, Error)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{}:{line}: {cause}", file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        cause: String,
    },

    #[error("invalid instance: {0}")]
    InvalidInstance(String),
}
